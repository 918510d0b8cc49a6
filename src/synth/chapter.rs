//! Chapter markers with per-act duration estimates.

use serde::{Deserialize, Serialize};

/// Base minutes assumed when the duration has no leading number.
pub const FALLBACK_BASE_MINUTES: f64 = 9.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub title: String,
    /// Label such as "3 min"
    pub duration: String,
    pub summary: String,
}

/// Build the chapter for the act at `index` (0-based).
///
/// Minutes are `max(1, round(base / 3) + index)`, where `base` is the
/// leading integer of `duration`.
///
/// Minutes are printed in plain decimal notation with no exponent, so a
/// very large base yields every digit (e.g. "100000000000000000000 min").
pub fn synthesize_chapter(label: &str, index: usize, duration: &str, summary: &str) -> ChapterSummary {
    let base = leading_integer(duration)
        .filter(|value| value.is_finite())
        .unwrap_or(FALLBACK_BASE_MINUTES);
    let minutes = (round_half_up(base / 3.0) + index as f64).max(1.0);

    ChapterSummary {
        title: format!("{}. {}", index + 1, label),
        duration: format!("{:.0} min", minutes),
        summary: summary.to_string(),
    }
}

/// Parse an optionally signed run of digits after leading whitespace.
///
/// Anything after the digits is ignored: "12 minutos" is 12.
fn leading_integer(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_len == 0 {
        return None;
    }
    // Very long runs overflow to infinity and are rejected by the caller
    rest[..digits_len].parse::<f64>().ok().map(|value| sign * value)
}

/// Round to nearest, ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
