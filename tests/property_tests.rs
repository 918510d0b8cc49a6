//! Property-Based Tests for storyforge
//!
//! These tests verify:
//! - Template filling never leaves placeholders behind
//! - Chapter durations follow max(1, round(base / 3) + index)
//! - Pack shape holds for arbitrary valid briefs and draws
//! - Enum string round-trips

use proptest::prelude::*;
use serde_json::json;
use storyforge::synth::chapter::synthesize_chapter;
use storyforge::{
    Language, OutputFormat, ScriptedSource, TokenMap, fill_template, generate_pack, validate_input,
};

// =============================================================================
// Template Filler Properties
// =============================================================================

proptest! {
    /// Text without braces is returned unchanged
    #[test]
    fn fill_without_placeholders_is_identity(text in "[^{}]*") {
        let tokens = TokenMap::from([("topic", "IA".to_string())]);
        prop_assert_eq!(fill_template(&text, &tokens), text);
    }

    /// Known names are replaced; unknown names vanish
    #[test]
    fn fill_replaces_every_placeholder(
        prefix in "[a-z ]{0,10}",
        value in "[a-zA-Z ]{0,10}",
        missing in "[a-z]{1,8}",
    ) {
        prop_assume!(missing != "topic");
        let tokens = TokenMap::from([("topic", value.clone())]);
        let template = format!("{}{{topic}}-{{{}}}-{{topic}}", prefix, missing);
        let filled = fill_template(&template, &tokens);
        prop_assert_eq!(filled, format!("{}{}--{}", prefix, value, value));
    }
}

// =============================================================================
// Chapter Synthesizer Properties
// =============================================================================

proptest! {
    /// Duration labels match the documented formula
    #[test]
    fn chapter_minutes_formula(base in 0u32..10_000, index in 0usize..10) {
        let chapter = synthesize_chapter("Ato", index, &base.to_string(), "resumo");
        let expected = ((base as f64 / 3.0 + 0.5).floor() as i64 + index as i64).max(1);
        prop_assert_eq!(chapter.duration, format!("{} min", expected));
        prop_assert_eq!(chapter.title, format!("{}. Ato", index + 1));
    }

    /// Text without a leading number behaves like a 9 minute base
    #[test]
    fn chapter_non_numeric_duration(text in "[a-z ]{0,12}", index in 0usize..5) {
        let chapter = synthesize_chapter("Ato", index, &text, "resumo");
        prop_assert_eq!(chapter.duration, format!("{} min", 3 + index));
    }
}

// =============================================================================
// Pack Shape Properties
// =============================================================================

fn framework_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("heroi-jornada".to_string()),
        Just("problema-solucao".to_string()),
        Just("docuserie".to_string()),
        "[a-z-]{2,16}",
    ]
}

proptest! {
    /// Any valid brief with any draws yields a complete three-act pack
    #[test]
    fn pack_shape_holds(
        channel in "[A-Za-z ]{2,20}",
        topic in "[A-Za-z ]{4,30}",
        audience in "[a-z ]{3,20}",
        tone in "[a-z ]{3,20}",
        duration in "[0-9a-z ]{2,8}",
        keywords in proptest::collection::vec("[a-z]{1,8}", 0..6),
        framework in framework_strategy(),
        chapters in any::<bool>(),
        draws in proptest::collection::vec(0usize..100, 0..12),
    ) {
        let brief = json!({
            "channelName": channel,
            "videoGoal": "crescer canal",
            "episodeTopic": topic,
            "audience": audience,
            "tone": tone,
            "duration": duration,
            "keywords": keywords,
            "narrativeFramework": framework,
            "includeChapters": chapters,
        });
        let input = validate_input(&brief).expect("generated briefs are valid");
        let pack = generate_pack(&input, &mut ScriptedSource::new(draws));

        prop_assert_eq!(pack.script.len(), 3);
        prop_assert_eq!(pack.key_moments.len(), 3);
        prop_assert_eq!(pack.dialogues.len(), 3);
        prop_assert_eq!(pack.visual_prompts.len(), 3);
        prop_assert_eq!(pack.broll_ideas.len(), 3);
        prop_assert_eq!(pack.chapters.len(), if chapters { 3 } else { 0 });
        prop_assert!(pack.dialogues.iter().all(|d| d.speakers.len() == 3));
        prop_assert!(pack.visual_prompts.iter().all(|p| p.aspect_ratio == "16:9"));
    }
}

// =============================================================================
// Enum Round-Trips
// =============================================================================

proptest! {
    #[test]
    fn language_roundtrip(lang in prop_oneof![Just(Language::Pt), Just(Language::En)]) {
        let parsed: Language = lang.to_string().parse().expect("Should parse");
        prop_assert_eq!(lang, parsed);
    }

    #[test]
    fn output_format_roundtrip(format in prop_oneof![Just(OutputFormat::Text), Just(OutputFormat::Json)]) {
        let parsed: OutputFormat = format.to_string().parse().expect("Should parse");
        prop_assert_eq!(format, parsed);
    }
}
