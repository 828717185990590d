use anyhow::{bail, Context, Result};

use super::require_profile;
use crate::builder::analyze;
use crate::report::{generate_report, writing_guidelines, Language};
use crate::segmenter::char_len;
use crate::store::ProfileStore;

/// Output format for commands with a machine-readable variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("invalid format '{}': expected text or json", s)),
        }
    }
}

/// Shortest ad-hoc text, in characters, worth profiling.
pub const MIN_ANALYZE_CHARS: usize = 50;

/// Profile JSON for a single ad-hoc text. Nothing is stored.
pub fn analyze_text(text: &str) -> Result<String> {
    if char_len(text.trim()) < MIN_ANALYZE_CHARS {
        bail!(
            "Text too short for meaningful analysis (minimum {} characters)",
            MIN_ANALYZE_CHARS
        );
    }
    let profile = analyze(&[text]);
    serde_json::to_string_pretty(&profile).context("failed to serialize profile")
}

pub fn report(store: &ProfileStore, name: &str) -> Result<String> {
    let profile = require_profile(store, name)?;
    Ok(generate_report(&profile))
}

pub fn guidelines(
    store: &ProfileStore,
    name: &str,
    language: Language,
    doc_type: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let profile = require_profile(store, name)?;
    let guidelines = writing_guidelines(&profile, language, doc_type);

    match format {
        OutputFormat::Text => Ok(guidelines
            .iter()
            .map(|g| format!("- {}", g))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "profile": name,
                "language": language.to_string(),
                "doc_type": doc_type,
                "guidelines": guidelines,
            });
            serde_json::to_string_pretty(&value).context("failed to serialize guidelines")
        }
    }
}

pub fn profiles(store: &ProfileStore) -> Result<String> {
    let names = store.list()?;
    if names.is_empty() {
        return Ok("No saved profiles. Create one with `style-profile learn <source>`.".to_string());
    }
    Ok(names
        .iter()
        .map(|n| format!("- {}", n))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Stored profile JSON, verbatim.
pub fn show(store: &ProfileStore, name: &str) -> Result<String> {
    require_profile(store, name)?;
    store
        .raw(name)?
        .with_context(|| format!("profile disappeared while reading: {}", name))
}
