//! storyforge - main entry point
//!
//! Thin presentation layer over the library: collects a brief from files and
//! flags, validates it, runs the engine and prints the result.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use storyforge::brief_file::{load_brief, load_pack, save_brief, save_pack};
use storyforge::cli::{Cli, Commands, GenerateArgs};
use storyforge::random::RngSource;
use storyforge::render::render_document;
use storyforge::{
    OutputFormat, PRESETS, StoryforgeError, frameworks, generate_from_raw, validate_input,
};

/// Initialize logging on stderr so stdout stays clean for the pack
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Generate(args)) => run_generate(&args)?,
        Some(Commands::Validate { brief }) => {
            info!("Validating brief file: {:?}", brief);
            let record = load_brief(&brief)?;
            match validate_input(&Value::Object(record)) {
                Ok(input) => {
                    println!(
                        "✓ Brief is valid: \"{}\" ({})",
                        input.episode_topic, input.narrative_framework
                    );
                }
                Err(e) => {
                    error!("Brief validation failed: {}", e);
                    eprintln!("✗ Brief validation failed:");
                    for issue in &e.issues {
                        eprintln!("  - {}", issue);
                    }
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Render { pack }) => {
            info!("Rendering saved pack: {:?}", pack);
            let pack = load_pack(&pack)?;
            println!("{}", render_document(&pack));
        }
        Some(Commands::Frameworks) => {
            for framework in frameworks() {
                println!("{:<18} {}", framework.id, framework.name);
                println!("{:<18} {}", "", framework.description);
            }
        }
        Some(Commands::Presets) => {
            for preset in PRESETS {
                println!(
                    "{:<16} {:<16} tone=\"{}\" framework={}",
                    preset.slug, preset.label, preset.tone, preset.narrative_framework
                );
            }
        }
        None => {
            info!("No command specified, generating from the sample brief");
            run_generate(&GenerateArgs::default())?;
        }
    }

    Ok(())
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let record = args.build_record()?;
    if let Some(path) = &args.save_brief {
        save_brief(&record, path)?;
        info!("Brief saved to {:?}", path);
    }

    let mut rng = match args.seed {
        Some(seed) => {
            debug!("Using seeded randomness ({})", seed);
            RngSource::seeded(seed)
        }
        None => RngSource::from_os(),
    };
    let pack = match generate_from_raw(&Value::Object(record), &mut rng) {
        Ok(pack) => pack,
        Err(StoryforgeError::Validation(e)) => {
            eprintln!("✗ Invalid brief:");
            for issue in &e.issues {
                eprintln!("  - {}", issue);
            }
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    info!(
        "Generated pack: {} script sections, {} chapters",
        pack.script.len(),
        pack.chapters.len()
    );

    match (args.format, &args.output) {
        (OutputFormat::Json, Some(path)) => {
            save_pack(&pack, path)?;
            info!("Pack written to {:?}", path);
        }
        (OutputFormat::Json, None) => {
            let json =
                serde_json::to_string_pretty(&pack).context("Failed to serialize pack to JSON")?;
            println!("{}", json);
        }
        (OutputFormat::Text, Some(path)) => write_text(path, &render_document(&pack))?,
        (OutputFormat::Text, None) => println!("{}", render_document(&pack)),
    }

    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write output to {:?}", path))?;
    info!("Pack written to {:?}", path);
    Ok(())
}
