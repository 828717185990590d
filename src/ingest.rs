use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use tracing::{info, warn};

/// A loaded source document.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

/// Load documents from a file or a directory.
///
/// A file is always read as one document. A directory contributes its
/// top-level files whose extension is in `extensions` (case-insensitive),
/// in path order. Files that are not valid UTF-8 are skipped.
pub fn load_documents(source: &Path, extensions: &[String]) -> Result<Vec<Document>> {
    if source.is_file() {
        let text = std::fs::read_to_string(source)
            .with_context(|| format!("failed to read document {}", source.display()))?;
        return Ok(vec![Document {
            path: source.to_path_buf(),
            text,
        }]);
    }

    if !source.is_dir() {
        bail!("source not found: {}", source.display());
    }

    let files = list_matching_files(source, extensions)?;
    let documents: Vec<Document> = files
        .par_iter()
        .filter_map(|path| match std::fs::read_to_string(path) {
            Ok(text) => Some(Document {
                path: path.clone(),
                text,
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable document");
                None
            }
        })
        .collect();

    info!(
        source = %source.display(),
        documents = documents.len(),
        "loaded documents"
    );
    Ok(documents)
}

/// Top-level files of `dir` with a matching extension, sorted by path.
fn list_matching_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_extension(p, extensions))
        .collect();
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions.iter().any(|want| want.eq_ignore_ascii_case(ext))
}
