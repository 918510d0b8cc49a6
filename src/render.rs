//! Plain-text export of a pack.
//!
//! Produces one copy-ready document: hook, synopsis, script, dialogues,
//! visual prompts and call to action, separated by blank lines.

use crate::engine::CreativePack;

/// Render the copyable text document for a pack.
pub fn render_plain_text(pack: &CreativePack) -> String {
    let script = pack
        .script
        .iter()
        .map(|block| format!("## {}\nObjetivo: {}\n{}", block.section, block.objective, block.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    let dialogues = pack
        .dialogues
        .iter()
        .map(|scene| {
            let lines = scene
                .speakers
                .iter()
                .map(|speaker| format!("{}: {}", speaker.name, speaker.line))
                .collect::<Vec<_>>()
                .join("\n");
            format!("#{}\nDireção: {}\n{}", scene.scene, scene.direction, lines)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let prompts = pack
        .visual_prompts
        .iter()
        .map(|prompt| {
            format!(
                "Prompt {}: {}\nNegativo: {}\nAspect Ratio: {} | Estilo: {}",
                prompt.title, prompt.prompt, prompt.negative_prompt, prompt.aspect_ratio, prompt.style
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{}\n\n{}\n\n{}\n\n{}\n\n{}\n\nCTA: {}",
        pack.hook, pack.synopsis, script, dialogues, prompts, pack.call_to_action
    )
}

/// The text document plus a "Capítulos:" listing when the pack has chapters.
pub fn render_document(pack: &CreativePack) -> String {
    let mut text = render_plain_text(pack);
    if !pack.chapters.is_empty() {
        text.push_str("\n\nCapítulos:\n");
        text.push_str(&render_chapters(pack));
    }
    text
}

/// Chapter list as "title (duration) - summary" lines, empty when there are none.
pub fn render_chapters(pack: &CreativePack) -> String {
    pack.chapters
        .iter()
        .map(|chapter| format!("{} ({}) - {}", chapter.title, chapter.duration, chapter.summary))
        .collect::<Vec<_>>()
        .join("\n")
}
