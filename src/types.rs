//! Type-safe option types for storyforge
//!
//! Small closed sets of values are Rust enums instead of strings so that
//! parsing happens once at the boundary and matching is exhaustive.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Language tag of a brief.
///
/// Accepted and carried through, but generation does not branch on it yet:
/// every template is Portuguese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

/// How the CLI prints a generated pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Copy-ready plain text document
    #[default]
    Text,
    /// The full pack as pretty-printed JSON
    Json,
}
