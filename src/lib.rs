//! storyforge library
//!
//! A parametric content generator: a short episode brief plus a narrative
//! framework becomes a complete creative pack (hook, synopsis, act script,
//! dialogues, image prompts, B-roll cues, chapters and call to action).
//!
//! ```no_run
//! use storyforge::{generate_pack, sample_brief, validate_input, RngSource};
//!
//! let input = validate_input(&sample_brief()).expect("valid brief");
//! let pack = generate_pack(&input, &mut RngSource::seeded(7));
//! println!("{}", pack.hook);
//! ```

pub mod brief_file;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod input;
pub mod presets;
pub mod random;
pub mod render;
pub mod synth;
pub mod template;
pub mod types;

// Re-export main types for convenience
pub use catalog::{
    ActStep, DEFAULT_FRAMEWORK_ID, FRAMEWORKS, NarrativeFramework, find_framework, frameworks,
    lookup_framework,
};
pub use engine::{
    CreativePack, ScriptSection, generate_from_raw, generate_pack, select_call_to_action,
    select_hook,
};
pub use error::{FieldIssue, Result, StoryforgeError, ValidationError};
pub use input::{CreativeInput, RawBrief, sample_brief, split_keywords, validate_input};
pub use presets::{PRESETS, Preset, find_preset};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use render::{render_document, render_plain_text};
pub use synth::{BrollIdea, ChapterSummary, DialogueScene, SpeakerLine, VisualPrompt};
pub use template::{TokenMap, build_tokens, fill_template};
pub use types::{Language, OutputFormat};
