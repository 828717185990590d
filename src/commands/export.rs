use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::require_profile;
use crate::report::style_guide;
use crate::store::ProfileStore;

/// Archived samples quoted into an exported guide at most.
const EXPORT_SAMPLE_LIMIT: usize = 20;

/// Write a Markdown style guide for `name`, by default next to the profile.
pub fn export(store: &ProfileStore, name: &str, output: Option<&Path>) -> Result<String> {
    let profile = require_profile(store, name)?;
    let mut samples = store.load_samples(name)?;
    samples.truncate(EXPORT_SAMPLE_LIMIT);

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => store.guide_path_for(name)?,
    };

    let guide = style_guide(&profile, name, &samples);
    std::fs::write(&path, guide)
        .with_context(|| format!("failed to write style guide {}", path.display()))?;
    info!(profile = name, path = %path.display(), samples = samples.len(), "exported style guide");

    Ok(format!(
        "Exported style guide for '{}': {}\n\n\
         Usage:\n\
         1. Add the file to your writing assistant's project knowledge\n\
         2. Ask it to write in this style",
        name,
        path.display()
    ))
}
