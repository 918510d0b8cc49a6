//! Image-generation prompts, one per act.

use serde::{Deserialize, Serialize};

use crate::catalog::pools::{ASPECT_RATIO, CAMERAS, NEGATIVE_TERMS, STYLES};
use crate::random::{RandomSource, choose};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualPrompt {
    pub title: String,
    pub prompt: String,
    pub negative_prompt: String,
    pub aspect_ratio: String,
    pub style: String,
    pub camera: String,
}

impl VisualPrompt {
    /// Prompt plus negative prompt, ready to paste into an image tool.
    pub fn copy_payload(&self) -> String {
        format!("{}\nNegativo: {}", self.prompt, self.negative_prompt)
    }
}

/// Build the visual prompt for one act.
///
/// Consumes two draws from `rng`: style first, then camera.
pub fn synthesize_visual_prompt(
    context: &str,
    audience: &str,
    tone: &str,
    topic: &str,
    keywords: &[String],
    rng: &mut dyn RandomSource,
) -> VisualPrompt {
    let style = *choose(rng, STYLES);
    let camera = *choose(rng, CAMERAS);

    let elements = keywords.join(", ");
    let elements = if elements.is_empty() { topic } else { elements.as_str() };

    VisualPrompt {
        title: format!("{} Visual", title_case(context)),
        prompt: format!(
            "Cena de {} sobre {}, com foco em {}, tom {}, elementos-chave: {}, atmosfera {}. {}",
            context,
            topic,
            audience,
            tone.to_lowercase(),
            elements,
            style,
            camera
        ),
        negative_prompt: NEGATIVE_TERMS.join(", "),
        aspect_ratio: ASPECT_RATIO.to_string(),
        style: style.to_string(),
        camera: camera.to_string(),
    }
}

/// Uppercase the first character of every space-separated word.
fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
