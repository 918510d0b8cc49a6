//! Input validation for episode briefs.
//!
//! A brief arrives as an untyped JSON record (from a file or assembled from
//! CLI flags). `validate_input` is the only way to obtain a `CreativeInput`,
//! so the engine never sees unchecked data.
//!
//! # Field Rules
//!
//! | Key                  | Type        | Rule            | Default |
//! |----------------------|-------------|-----------------|---------|
//! | `channelName`        | string      | ≥ 2 characters  | required |
//! | `videoGoal`          | string      | ≥ 4 characters  | required |
//! | `episodeTopic`       | string      | ≥ 4 characters  | required |
//! | `audience`           | string      | ≥ 3 characters  | required |
//! | `tone`               | string      | ≥ 3 characters  | required |
//! | `duration`           | string      | ≥ 2 characters  | required |
//! | `narrativeFramework` | string      | ≥ 2 characters  | required |
//! | `keywords`           | string[]    | -               | `[]` |
//! | `language`           | `pt` / `en` | -               | `pt` |
//! | `includeChapters`    | bool        | -               | `true` |
//!
//! Lengths count characters, not bytes. Unknown keys are ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{FieldIssue, ValidationError};
use crate::types::Language;

/// Minimum character count for each required text field, in record order.
///
/// Counts are Unicode scalar values (`char`s), not UTF-16 code units, so an
/// emoji outside the Basic Multilingual Plane counts as one character.
pub const TEXT_FIELD_RULES: &[(&str, usize)] = &[
    ("channelName", 2),
    ("videoGoal", 4),
    ("episodeTopic", 4),
    ("audience", 3),
    ("tone", 3),
    ("duration", 2),
    ("narrativeFramework", 2),
];

/// A validated episode brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeInput {
    pub channel_name: String,
    pub video_goal: String,
    pub episode_topic: String,
    pub audience: String,
    pub tone: String,
    /// Free text such as "10" or "12 minutos"
    pub duration: String,
    pub keywords: Vec<String>,
    /// Catalog identifier; unknown ids fall back at generation time
    pub narrative_framework: String,
    pub language: Language,
    pub include_chapters: bool,
}

/// A field as it arrived in the raw record.
///
/// Deserializing never fails: a value of the wrong type is kept as
/// `Invalid` so the validation pass can report it alongside the others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Checked<T> {
    Valid(T),
    Invalid(Value),
    #[serde(skip_deserializing)]
    Missing,
}

impl<T> Default for Checked<T> {
    fn default() -> Self {
        Checked::Missing
    }
}

/// An unvalidated brief with the input's camelCase keys.
///
/// Unknown keys are ignored and absent keys become `Missing`. `null` is
/// kept as an invalid value, not treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawBrief {
    channel_name: Checked<String>,
    video_goal: Checked<String>,
    episode_topic: Checked<String>,
    audience: Checked<String>,
    tone: Checked<String>,
    duration: Checked<String>,
    narrative_framework: Checked<String>,
    keywords: Checked<Vec<Checked<String>>>,
    language: Checked<Language>,
    include_chapters: Checked<bool>,
}

impl RawBrief {
    /// Read a raw JSON record. Only non-objects are rejected here.
    pub fn from_value(raw: &Value) -> Result<Self, ValidationError> {
        if !raw.is_object() {
            return Err(ValidationError::single("input", "expected a JSON object"));
        }
        RawBrief::deserialize(raw).map_err(|e| ValidationError::single("input", e.to_string()))
    }

    /// Check every field, collecting all issues before returning.
    pub fn validate(self) -> Result<CreativeInput, ValidationError> {
        let mut issues = Vec::new();
        let mut text = |field: &str, value: Checked<String>| {
            required_text(field, value, min_length(field), &mut issues)
        };

        let channel_name = text("channelName", self.channel_name);
        let video_goal = text("videoGoal", self.video_goal);
        let episode_topic = text("episodeTopic", self.episode_topic);
        let audience = text("audience", self.audience);
        let tone = text("tone", self.tone);
        let duration = text("duration", self.duration);
        let narrative_framework = text("narrativeFramework", self.narrative_framework);

        let keywords = keyword_list(self.keywords, &mut issues);
        let language = match self.language {
            Checked::Valid(language) => language,
            Checked::Missing => Language::default(),
            Checked::Invalid(_) => {
                issues.push(FieldIssue::new("language", "expected one of: pt, en"));
                Language::default()
            }
        };
        let include_chapters = match self.include_chapters {
            Checked::Valid(flag) => flag,
            Checked::Missing => true,
            Checked::Invalid(_) => {
                issues.push(FieldIssue::new("includeChapters", "expected a boolean"));
                true
            }
        };

        if !issues.is_empty() {
            return Err(ValidationError::new(issues));
        }

        Ok(CreativeInput {
            channel_name,
            video_goal,
            episode_topic,
            audience,
            tone,
            duration,
            keywords,
            narrative_framework,
            language,
            include_chapters,
        })
    }
}

/// Validate a raw record into a `CreativeInput`.
///
/// Every failing field is collected before returning, so callers can show
/// the whole list at once.
pub fn validate_input(raw: &Value) -> Result<CreativeInput, ValidationError> {
    RawBrief::from_value(raw)?.validate()
}

/// Minimum character count for a required text field (0 for other keys).
pub fn min_length(field: &str) -> usize {
    TEXT_FIELD_RULES
        .iter()
        .find(|(name, _)| *name == field)
        .map_or(0, |&(_, min)| min)
}

fn required_text(
    field: &str,
    value: Checked<String>,
    min: usize,
    issues: &mut Vec<FieldIssue>,
) -> String {
    match value {
        Checked::Valid(text) => {
            if text.chars().count() < min {
                issues.push(FieldIssue::new(
                    field,
                    format!("must contain at least {} characters", min),
                ));
            }
            text
        }
        Checked::Missing => {
            issues.push(FieldIssue::new(field, "is required"));
            String::new()
        }
        Checked::Invalid(_) => {
            issues.push(FieldIssue::new(field, "expected a string"));
            String::new()
        }
    }
}

fn keyword_list(value: Checked<Vec<Checked<String>>>, issues: &mut Vec<FieldIssue>) -> Vec<String> {
    match value {
        Checked::Missing => Vec::new(),
        Checked::Valid(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                Checked::Valid(word) => Some(word),
                _ => {
                    issues.push(FieldIssue::new(
                        format!("keywords[{}]", index),
                        "expected a string",
                    ));
                    None
                }
            })
            .collect(),
        Checked::Invalid(_) => {
            issues.push(FieldIssue::new("keywords", "expected an array of strings"));
            Vec::new()
        }
    }
}

/// Split a comma-separated keyword string, trimming and dropping empties.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// The built-in example brief, used when nothing else is supplied.
pub fn sample_brief() -> Value {
    json!({
        "channelName": "Canal Nova Geração IA",
        "videoGoal": "aumentar retenção e comunidade",
        "episodeTopic": "Como usar IA generativa para roteiros semanais",
        "audience": "criadores independentes de conteúdo",
        "tone": "técnico inspirador",
        "duration": "10",
        "keywords": ["roteiro IA", "workflows semanais", "automação"],
        "narrativeFramework": "problema-solucao",
        "language": "pt",
        "includeChapters": true,
    })
}
