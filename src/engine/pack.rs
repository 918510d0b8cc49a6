//! Pack assembly.
//!
//! Orchestrates one generation: resolve the framework, derive tokens, then
//! build every section of the pack from the blueprint.
//!
//! # Assembly Order
//!
//! | Step | Section        | Source |
//! |------|----------------|--------|
//! | 1    | hook           | random hook template (1 draw) |
//! | 2    | synopsis       | fixed sentence |
//! | 3    | keyMoments     | one line per act |
//! | 4    | script         | one section per act, hook opens the first |
//! | 5    | dialogues      | `synth::dialogue` per act |
//! | 6    | visualPrompts  | `synth::visual` per act (2 draws each) |
//! | 7    | brollIdeas     | `synth::broll` per act |
//! | 8    | callToAction   | random CTA template (1 draw) |
//! | 9    | chapters       | `synth::chapter` per act, when requested |
//! | 10   | deliverables   | fixed list |
//!
//! Once the input is validated nothing here can fail.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::catalog::pools::DELIVERABLES;
use crate::catalog::{ActStep, lookup_framework};
use crate::engine::selection::{select_call_to_action, select_hook};
use crate::error::Result;
use crate::input::{CreativeInput, validate_input};
use crate::random::RandomSource;
use crate::synth::{
    BrollIdea, ChapterSummary, DialogueScene, VisualPrompt, synthesize_broll, synthesize_chapter,
    synthesize_dialogue, synthesize_visual_prompt,
};
use crate::template::build_tokens;

/// Opening of every script section after the first.
pub const TRANSITION_LINE: &str = "Transição suave para o próximo ato.";

/// Duration handed to the chapter synthesizer when the brief has no digits.
pub const CHAPTER_DURATION_FALLBACK: &str = "8";

/// One act of the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSection {
    pub section: String,
    pub objective: String,
    pub content: String,
}

/// Everything one generation produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativePack {
    pub hook: String,
    pub synopsis: String,
    pub key_moments: Vec<String>,
    pub script: Vec<ScriptSection>,
    pub dialogues: Vec<DialogueScene>,
    pub visual_prompts: Vec<VisualPrompt>,
    pub broll_ideas: Vec<BrollIdea>,
    pub call_to_action: String,
    /// Empty when chapters were not requested
    pub chapters: Vec<ChapterSummary>,
    pub deliverables: Vec<String>,
}

/// Generate a complete pack from a validated brief.
///
/// Random draws happen in a fixed order (hook, then style and camera for
/// each act, then CTA) so a scripted or seeded source reproduces the same
/// pack.
pub fn generate_pack(input: &CreativeInput, rng: &mut dyn RandomSource) -> CreativePack {
    let framework = lookup_framework(&input.narrative_framework);
    let tokens = build_tokens(input);
    debug!(
        "Generating pack with framework '{}' ({} acts)",
        framework.id,
        framework.blueprint.len()
    );

    let hook = select_hook(framework, &tokens, rng);
    let synopsis = synopsis(input);

    let key_moments = framework
        .blueprint
        .iter()
        .enumerate()
        .map(|(index, step)| format!("Momento {}: {} — {}", index + 1, step.label, step.objective))
        .collect();

    let script: Vec<ScriptSection> = framework
        .blueprint
        .iter()
        .enumerate()
        .map(|(index, step)| script_section(step, index, &hook, input))
        .collect();

    let dialogues = script
        .iter()
        .map(|section| {
            synthesize_dialogue(&section.section, &section.objective, &input.tone, &input.channel_name)
        })
        .collect();

    let visual_prompts = script
        .iter()
        .map(|section| {
            synthesize_visual_prompt(
                &section.section,
                &input.audience,
                &input.tone,
                &input.episode_topic,
                &input.keywords,
                &mut *rng,
            )
        })
        .collect();

    let broll_ideas = script
        .iter()
        .map(|section| synthesize_broll(&section.section, &input.episode_topic, &input.keywords))
        .collect();

    let call_to_action = select_call_to_action(framework, &tokens, rng);

    let chapters = if input.include_chapters {
        let duration = chapter_duration_source(&input.duration);
        framework
            .blueprint
            .iter()
            .enumerate()
            .map(|(index, step)| synthesize_chapter(step.label, index, &duration, step.objective))
            .collect()
    } else {
        Vec::new()
    };

    let deliverables = DELIVERABLES.iter().map(|item| item.to_string()).collect();

    CreativePack {
        hook,
        synopsis,
        key_moments,
        script,
        dialogues,
        visual_prompts,
        broll_ideas,
        call_to_action,
        chapters,
        deliverables,
    }
}

/// Validate a raw record and generate in one step.
///
/// Validation failures surface before any random draw is consumed.
pub fn generate_from_raw(raw: &Value, rng: &mut dyn RandomSource) -> Result<CreativePack> {
    let input = validate_input(raw)?;
    Ok(generate_pack(&input, rng))
}

fn synopsis(input: &CreativeInput) -> String {
    format!(
        "Neste episódio vamos explorar {} com foco em {}, pensado especialmente para {}. \
         Com um tom {} e duração aproximada de {}, guiamos a audiência por uma experiência envolvente.",
        input.episode_topic.to_lowercase(),
        input.video_goal.to_lowercase(),
        input.audience,
        input.tone,
        input.duration
    )
}

fn script_section(step: &ActStep, index: usize, hook: &str, input: &CreativeInput) -> ScriptSection {
    let opening = if index == 0 { hook } else { TRANSITION_LINE };
    let content = format!(
        "\n{}\n\
         1. Contextualize {} com exemplos que ressoem com {}.\n\
         2. Traga uma evidência ou estatística rápida que valide o problema.\n\
         3. Insira um micro cliffhanger para manter o ritmo {}.",
        opening,
        input.episode_topic,
        input.audience,
        input.tone.to_lowercase()
    );

    ScriptSection {
        section: step.label.to_string(),
        objective: step.objective.to_string(),
        content,
    }
}

/// Keep only the digits of a free-text duration ("12 min" → "12").
fn chapter_duration_source(duration: &str) -> String {
    let digits: String = duration.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        CHAPTER_DURATION_FALLBACK.to_string()
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{sample_brief, validate_input};
    use crate::random::ScriptedSource;

    fn sample_input() -> CreativeInput {
        validate_input(&sample_brief()).expect("sample brief should validate")
    }

    #[test]
    fn test_sections_follow_blueprint_length() {
        let pack = generate_pack(&sample_input(), &mut ScriptedSource::first());
        assert_eq!(pack.key_moments.len(), 3);
        assert_eq!(pack.script.len(), 3);
        assert_eq!(pack.dialogues.len(), 3);
        assert_eq!(pack.visual_prompts.len(), 3);
        assert_eq!(pack.broll_ideas.len(), 3);
        assert_eq!(pack.chapters.len(), 3);
        assert_eq!(pack.deliverables.len(), 4);
    }

    #[test]
    fn test_exact_output_with_scripted_draws() {
        // hook 2, then (style, camera) x3, then CTA 1
        let mut rng = ScriptedSource::new(vec![2, 0, 0, 1, 1, 2, 2, 1]);
        let pack = generate_pack(&sample_input(), &mut rng);

        assert_eq!(
            pack.hook,
            "Se você quer aumentar retenção e comunidade sem perder tempo e orçamento, \
             precisa dominar Como usar IA generativa para roteiros semanais agora."
        );
        assert_eq!(
            pack.call_to_action,
            "Deixe um comentário com sua maior dúvida sobre Como usar IA generativa para roteiros semanais \
             que eu respondo pessoalmente."
        );
        assert_eq!(pack.visual_prompts[0].style, "cinematográfico futurista");
        assert_eq!(pack.visual_prompts[1].style, "ilustrado digital vibrante");
        assert_eq!(pack.visual_prompts[2].camera, "steadycam hand-held, luz suave");
        assert_eq!(rng.draws(), 8);
    }

    #[test]
    fn test_synopsis_and_key_moments() {
        let pack = generate_pack(&sample_input(), &mut ScriptedSource::first());
        assert_eq!(
            pack.synopsis,
            "Neste episódio vamos explorar como usar ia generativa para roteiros semanais com foco em \
             aumentar retenção e comunidade, pensado especialmente para criadores independentes de conteúdo. \
             Com um tom técnico inspirador e duração aproximada de 10, guiamos a audiência por uma experiência envolvente."
        );
        assert_eq!(
            pack.key_moments[1],
            "Momento 2: Método Em 3 Etapas — Mostrar uma solução estruturada e escalável, com exemplos reais."
        );
    }

    #[test]
    fn test_hook_opens_only_first_script_section() {
        let pack = generate_pack(&sample_input(), &mut ScriptedSource::first());
        assert!(pack.script[0].content.starts_with(&format!("\n{}\n1. ", pack.hook)));
        for section in &pack.script[1..] {
            assert!(section.content.starts_with(&format!("\n{}\n", TRANSITION_LINE)));
        }
        assert!(pack.script[2].content.ends_with("manter o ritmo técnico inspirador."));
    }

    #[test]
    fn test_unknown_framework_falls_back() {
        let mut input = sample_input();
        input.narrative_framework = "nonexistent".to_string();
        let pack = generate_pack(&input, &mut ScriptedSource::first());
        assert_eq!(pack.script[0].section, "Identificação da Dor");
        assert!(pack.hook.starts_with("criadores independentes de conteúdo, você está cansado"));
    }

    #[test]
    fn test_chapters_can_be_disabled() {
        let mut input = sample_input();
        input.include_chapters = false;
        let pack = generate_pack(&input, &mut ScriptedSource::first());
        assert!(pack.chapters.is_empty());
    }

    #[test]
    fn test_chapter_durations() {
        let mut input = sample_input();
        input.duration = "cerca de 12 min".to_string();
        let pack = generate_pack(&input, &mut ScriptedSource::first());
        let labels: Vec<&str> = pack.chapters.iter().map(|c| c.duration.as_str()).collect();
        assert_eq!(labels, vec!["4 min", "5 min", "6 min"]);
        assert_eq!(pack.chapters[2].title, "3. Transformação Realista");

        input.duration = "dez minutos".to_string();
        let pack = generate_pack(&input, &mut ScriptedSource::first());
        // No digits: "8" → round(8 / 3) = 3
        assert_eq!(pack.chapters[0].duration, "3 min");
    }

    #[test]
    fn test_generate_from_raw_rejects_before_drawing() {
        let mut brief = sample_brief();
        brief["tone"] = serde_json::json!("ok");
        let mut rng = ScriptedSource::first();
        let err = generate_from_raw(&brief, &mut rng).unwrap_err();
        assert!(matches!(err, crate::error::StoryforgeError::Validation(ref e) if e.has_field("tone")));
        assert_eq!(rng.draws(), 0);

        let pack = generate_from_raw(&sample_brief(), &mut rng).expect("valid brief");
        assert_eq!(pack.script.len(), 3);
        assert_eq!(rng.draws(), 8);
    }

    #[test]
    fn test_chapter_duration_source() {
        assert_eq!(chapter_duration_source("1h30"), "130");
        assert_eq!(chapter_duration_source("curto"), CHAPTER_DURATION_FALLBACK);
    }

    #[test]
    fn test_empty_keywords_use_topic() {
        let mut input = sample_input();
        input.keywords.clear();
        let pack = generate_pack(&input, &mut ScriptedSource::first());
        for prompt in &pack.visual_prompts {
            assert!(prompt.prompt.contains(&format!("elementos-chave: {}", input.episode_topic)));
        }
        for idea in &pack.broll_ideas {
            assert!(idea.prompt.contains(&format!("detalhes em {}", input.episode_topic)));
        }
    }

    #[test]
    fn test_pack_serializes_camel_case() {
        let pack = generate_pack(&sample_input(), &mut ScriptedSource::first());
        let value = serde_json::to_value(&pack).expect("serialize");
        assert!(value.get("keyMoments").is_some());
        assert!(value.get("callToAction").is_some());
        assert!(value["visualPrompts"][0].get("negativePrompt").is_some());
        assert!(value["visualPrompts"][0].get("aspectRatio").is_some());
    }
}
