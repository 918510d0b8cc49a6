//! Section synthesizers.
//!
//! Each synthesizer turns one blueprint step, plus a few brief fields, into
//! one structured artifact. They are independent of each other and of the
//! framework they came from, so new frameworks need no changes here.
//!
//! # Modules
//!
//! - `dialogue`: three-speaker scene per act
//! - `visual`: image-generation prompt per act (draws style and camera)
//! - `broll`: supporting footage cue per act
//! - `chapter`: timed chapter marker per act

pub mod broll;
pub mod chapter;
pub mod dialogue;
pub mod visual;

pub use broll::{BrollIdea, synthesize_broll};
pub use chapter::{ChapterSummary, synthesize_chapter};
pub use dialogue::{DialogueScene, SpeakerLine, synthesize_dialogue};
pub use visual::{VisualPrompt, synthesize_visual_prompt};
