//! Error handling module for storyforge
//!
//! Provides centralized error types using thiserror. The generation engine
//! itself never fails; errors only come from input validation and from
//! resolving CLI choices such as presets.

use std::fmt;
use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Raw record key (camelCase, as submitted)
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Raised by the input validator when a raw record cannot become a
/// `CreativeInput`. Carries every failing field, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Error for a single field
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldIssue::new(field, message)])
    }

    /// Check whether a given field is among the failures
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Main error type for storyforge
#[derive(Error, Debug)]
pub enum StoryforgeError {
    /// Raw input rejected by the validator
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration errors (unknown preset)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for storyforge operations
pub type Result<T> = std::result::Result<T, StoryforgeError>;

impl StoryforgeError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
