//! Named shortcuts for common (tone, framework) pairings.

use serde_json::{Map, Value};

/// A preset overrides `tone` and `narrativeFramework` of a raw brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub slug: &'static str,
    pub label: &'static str,
    pub tone: &'static str,
    pub narrative_framework: &'static str,
}

pub static PRESETS: &[Preset] = &[
    Preset {
        slug: "explainer-tech",
        label: "Explainer Tech",
        tone: "técnico inspirador",
        narrative_framework: "problema-solucao",
    },
    Preset {
        slug: "story-mode",
        label: "Story Mode",
        tone: "investigativo cinematográfico",
        narrative_framework: "docuserie",
    },
    Preset {
        slug: "motivacional",
        label: "Motivacional",
        tone: "inspirador emocional",
        narrative_framework: "heroi-jornada",
    },
];

/// Find a preset by slug or label, ignoring case.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS
        .iter()
        .find(|preset| preset.slug.eq_ignore_ascii_case(name) || preset.label.eq_ignore_ascii_case(name))
}

impl Preset {
    /// Write this preset's tone and framework into a raw brief record.
    pub fn apply(&self, record: &mut Map<String, Value>) {
        record.insert("tone".to_string(), Value::from(self.tone));
        record.insert(
            "narrativeFramework".to_string(),
            Value::from(self.narrative_framework),
        );
    }
}
