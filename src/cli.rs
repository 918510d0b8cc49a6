use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::brief_file::load_brief;
use crate::error::StoryforgeError;
use crate::input::{sample_brief, split_keywords};
use crate::presets::find_preset;
use crate::types::OutputFormat;

/// storyforge - episode scripts, dialogues and image prompts from a short brief
#[derive(Parser, Debug)]
#[command(name = "storyforge")]
#[command(about = "Generate a creative pack (script, dialogues, prompts, chapters) for a video episode")]
#[command(version)]
pub struct Cli {
    /// Show debug logs (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a creative pack
    Generate(GenerateArgs),
    /// Validate a brief file and report every problem
    Validate {
        /// Path to the brief JSON file
        brief: PathBuf,
    },
    /// Print a previously saved JSON pack as the text document
    Render {
        /// Path to a pack written with `generate --format json --output`
        pack: PathBuf,
    },
    /// List the narrative frameworks
    Frameworks,
    /// List the tone/framework presets
    Presets,
}

/// Brief fields for `generate`.
///
/// Fields are layered: the brief file (or the built-in sample), then the
/// preset, then any explicit flag.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Brief JSON file to start from (defaults to the built-in sample)
    #[arg(short, long)]
    pub brief: Option<PathBuf>,

    /// Preset name (explainer-tech, story-mode, motivacional)
    #[arg(short, long)]
    pub preset: Option<String>,

    #[arg(long)]
    pub channel_name: Option<String>,

    #[arg(long)]
    pub video_goal: Option<String>,

    #[arg(long)]
    pub episode_topic: Option<String>,

    #[arg(long)]
    pub audience: Option<String>,

    #[arg(long)]
    pub tone: Option<String>,

    /// Duration in minutes (free text such as "10" or "12 min")
    #[arg(long)]
    pub duration: Option<String>,

    /// Comma-separated keywords
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Narrative framework id
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Language tag (pt or en)
    #[arg(long)]
    pub language: Option<String>,

    /// Leave the chapter list empty
    #[arg(long)]
    pub no_chapters: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also save the assembled brief to this file (reusable with --brief)
    #[arg(long)]
    pub save_brief: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl GenerateArgs {
    /// Assemble the raw brief record these arguments describe.
    ///
    /// The record is not validated here.
    pub fn build_record(&self) -> Result<Map<String, Value>> {
        let mut record = match &self.brief {
            Some(path) => load_brief(path)?,
            None => sample_brief()
                .as_object()
                .cloned()
                .context("Built-in sample brief is not an object")?,
        };

        if let Some(name) = &self.preset {
            find_preset(name)
                .ok_or_else(|| StoryforgeError::config(format!("Unknown preset '{}'", name)))?
                .apply(&mut record);
        }

        let text_flags = [
            ("channelName", &self.channel_name),
            ("videoGoal", &self.video_goal),
            ("episodeTopic", &self.episode_topic),
            ("audience", &self.audience),
            ("tone", &self.tone),
            ("duration", &self.duration),
            ("narrativeFramework", &self.framework),
            ("language", &self.language),
        ];
        for (key, value) in text_flags {
            if let Some(value) = value {
                record.insert(key.to_string(), Value::from(value.as_str()));
            }
        }

        if let Some(raw) = &self.keywords {
            record.insert("keywords".to_string(), Value::from(split_keywords(raw)));
        }
        if self.no_chapters {
            record.insert("includeChapters".to_string(), Value::Bool(false));
        }

        Ok(record)
    }
}
