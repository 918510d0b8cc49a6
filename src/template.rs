//! Token derivation and `{placeholder}` substitution.
//!
//! Hook and call-to-action templates reference a fixed set of tokens. The
//! token map is built once per generation from the validated brief.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::input::CreativeInput;

/// Persona used when the audience has no words at all.
pub const FALLBACK_PERSONA: &str = "público";

// Fixed phrasings for tokens the brief does not carry
pub const DEFAULT_PAIN: &str = "falta de resultados";
pub const DEFAULT_DESIRE: &str = "crescimento acelerado";
pub const DEFAULT_PAIN_POINT: &str = "frustração diária";
pub const DEFAULT_RESOURCE: &str = "tempo e orçamento";

/// Named values substituted into templates.
pub type TokenMap = BTreeMap<&'static str, String>;

/// Derive the token map from a brief.
///
/// `pain`, `desire`, `painPoint` and `resource` are fixed phrasings for now.
pub fn build_tokens(input: &CreativeInput) -> TokenMap {
    let persona = input
        .audience
        .split_whitespace()
        .next()
        .unwrap_or(FALLBACK_PERSONA);

    TokenMap::from([
        ("audience", input.audience.clone()),
        ("topic", input.episode_topic.clone()),
        ("goal", input.video_goal.clone()),
        ("persona", persona.to_string()),
        ("pain", DEFAULT_PAIN.to_string()),
        ("desire", DEFAULT_DESIRE.to_string()),
        ("painPoint", DEFAULT_PAIN_POINT.to_string()),
        ("resource", DEFAULT_RESOURCE.to_string()),
    ])
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE
        .get_or_init(|| Regex::new(r"\{(.*?)\}").expect("placeholder regex should compile"))
}

/// Replace every `{name}` with `tokens[name]`.
///
/// Names are matched lazily up to the first `}`. Unknown names render as an
/// empty string; the literal placeholder never survives.
pub fn fill_template(template: &str, tokens: &TokenMap) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            tokens.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}
