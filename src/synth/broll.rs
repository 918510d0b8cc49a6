//! Supporting footage cues.

use serde::{Deserialize, Serialize};

/// How many keywords a cue mentions at most.
pub const MAX_BROLL_KEYWORDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrollIdea {
    pub cue: String,
    pub prompt: String,
}

/// Build the B-roll cue for one act, falling back to the topic when there
/// are no keywords.
pub fn synthesize_broll(section: &str, topic: &str, keywords: &[String]) -> BrollIdea {
    let details = keywords
        .iter()
        .take(MAX_BROLL_KEYWORDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let details = if details.is_empty() { topic } else { details.as_str() };

    BrollIdea {
        cue: section.to_string(),
        prompt: format!(
            "B-roll dinâmico mostrando {}, detalhes em {}, textura cinematográfica em câmera lenta, luz volumétrica.",
            section.to_lowercase(),
            details
        ),
    }
}
