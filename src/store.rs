use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::types::StyleProfile;

const PROFILE_EXT: &str = "json";

/// Separates archived sample texts inside `<name>_samples.txt`.
pub const SAMPLE_SEPARATOR: &str = "\n\n---\n\n";
/// Archived texts kept per profile, newest first.
pub const MAX_ARCHIVED_SAMPLES: usize = 100;

/// Named profiles stored as pretty JSON files in one directory.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `name`. Rejects names that would escape the directory.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            bail!("invalid profile name '{}'", name);
        }
        Ok(self.dir.join(format!("{}.{}", name, PROFILE_EXT)))
    }

    /// Path of the raw sample archive kept next to the profile.
    pub fn samples_path_for(&self, name: &str) -> Result<PathBuf> {
        self.path_for(name)?;
        Ok(self.dir.join(format!("{}_samples.txt", name)))
    }

    /// Default location of an exported style guide.
    pub fn guide_path_for(&self, name: &str) -> Result<PathBuf> {
        self.path_for(name)?;
        Ok(self.dir.join(format!("{}_style_guide.md", name)))
    }

    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.path_for(name)?.is_file())
    }

    pub fn save(&self, name: &str, profile: &StyleProfile) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create profile directory {}", self.dir.display()))?;

        let json = serde_json::to_string_pretty(profile).context("failed to serialize profile")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write profile {}", path.display()))?;

        info!(
            profile = name,
            path = %path.display(),
            documents = profile.metadata.total_documents,
            "saved profile"
        );
        Ok(path)
    }

    /// `None` when no profile of that name has been saved.
    pub fn load(&self, name: &str) -> Result<Option<StyleProfile>> {
        let Some(content) = self.raw(name)? else {
            return Ok(None);
        };
        let path = self.path_for(name)?;
        let profile = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse profile {}", path.display()))?;
        debug!(profile = name, "loaded profile");
        Ok(Some(profile))
    }

    /// Stored JSON text, as written.
    pub fn raw(&self, name: &str) -> Result<Option<String>> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read profile {}", path.display()))?;
        Ok(Some(content))
    }

    /// Replace the sample archive of `name`, keeping the first
    /// [`MAX_ARCHIVED_SAMPLES`] texts. Returns how many were kept.
    pub fn save_samples<S: AsRef<str>>(&self, name: &str, samples: &[S]) -> Result<usize> {
        let path = self.samples_path_for(name)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create profile directory {}", self.dir.display()))?;

        let kept: Vec<&str> = samples
            .iter()
            .map(AsRef::as_ref)
            .take(MAX_ARCHIVED_SAMPLES)
            .collect();
        std::fs::write(&path, kept.join(SAMPLE_SEPARATOR))
            .with_context(|| format!("failed to write samples {}", path.display()))?;

        debug!(profile = name, samples = kept.len(), "archived samples");
        Ok(kept.len())
    }

    /// Put `samples` in front of the archived ones, dropping the oldest past the cap.
    pub fn prepend_samples<S: AsRef<str>>(&self, name: &str, samples: &[S]) -> Result<usize> {
        let mut combined: Vec<String> = samples.iter().map(|s| s.as_ref().to_string()).collect();
        combined.extend(self.load_samples(name)?);
        self.save_samples(name, &combined)
    }

    /// Archived sample texts, newest first. Empty when nothing was archived.
    pub fn load_samples(&self, name: &str) -> Result<Vec<String>> {
        let path = self.samples_path_for(name)?;
        if !path.is_file() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read samples {}", path.display()))?;
        Ok(content
            .split(SAMPLE_SEPARATOR)
            .filter(|s| !s.trim().is_empty())
            .map(String::from)
            .collect())
    }

    /// Sorted names of stored profiles. A missing directory holds none.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read profile directory {}", self.dir.display()))?;

        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(PROFILE_EXT))
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect();
        names.sort();
        Ok(names)
    }
}
