//! Brief and pack file handling.
//!
//! Briefs are JSON objects with the same camelCase keys as the raw input
//! record. They are loaded untyped and handed to the validator unchanged,
//! so a file and a CLI-assembled record go through exactly the same checks.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::engine::CreativePack;

/// Load a raw brief record from a JSON file.
pub fn load_brief<P: AsRef<Path>>(path: P) -> Result<Map<String, Value>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read brief from {:?}", path))?;

    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse brief JSON in {:?}", path))?;

    match value {
        Value::Object(record) => {
            info!("Loaded brief with {} fields from {:?}", record.len(), path);
            Ok(record)
        }
        other => anyhow::bail!(
            "Brief file {:?} must contain a JSON object, found {}",
            path,
            json_kind(&other)
        ),
    }
}

/// Save a raw brief record as pretty JSON.
pub fn save_brief<P: AsRef<Path>>(record: &Map<String, Value>, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(record).context("Failed to serialize brief to JSON")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write brief to {:?}", path.as_ref()))?;
    Ok(())
}

/// Save a generated pack as pretty JSON.
pub fn save_pack<P: AsRef<Path>>(pack: &CreativePack, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(pack).context("Failed to serialize pack to JSON")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write pack to {:?}", path.as_ref()))?;
    Ok(())
}

/// Load a previously saved pack.
pub fn load_pack<P: AsRef<Path>>(path: P) -> Result<CreativePack> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pack from {:?}", path.as_ref()))?;
    serde_json::from_str(&content).context("Failed to parse pack JSON")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
