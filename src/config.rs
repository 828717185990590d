use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.yaml";

/// Environment variable access, abstracted so tests can isolate the home directory.
pub trait Env: Send + Sync {
    fn var(&self, key: &str) -> Result<String, std::env::VarError>;
}

/// Reads the real process environment.
pub struct RealEnv;

impl Env for RealEnv {
    fn var(&self, key: &str) -> Result<String, std::env::VarError> {
        std::env::var(key)
    }
}

/// `$STYLE_PROFILE_HOME`, else `~/.style-profile`.
pub fn style_profile_home(env: &dyn Env) -> PathBuf {
    if let Ok(home) = env.var("STYLE_PROFILE_HOME") {
        return PathBuf::from(home);
    }
    let home = env.var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".style-profile")
}

/// User settings from `<home>/config.yaml`. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Relative paths resolve against the style-profile home.
    pub profiles_dir: String,
    pub default_profile: String,
    /// Extensions picked up when learning from a directory.
    pub extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profiles_dir: "profiles".into(),
            default_profile: "default".into(),
            extensions: vec!["txt".into(), "md".into()],
        }
    }
}

impl Settings {
    /// Load settings from the style-profile home. An absent file yields
    /// defaults; an unparsable one is reported and also yields defaults.
    pub fn load(env: &dyn Env) -> Self {
        let path = style_profile_home(env).join(CONFIG_FILENAME);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match serde_yaml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unparsable config");
                Self::default()
            }
        }
    }

    pub fn profiles_path(&self, home: &Path) -> PathBuf {
        resolve_dir(&self.profiles_dir, home)
    }
}

/// Absolute paths are kept, relative ones are joined onto `home`.
pub fn resolve_dir(dir: &str, home: &Path) -> PathBuf {
    let path = Path::new(dir);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        home.join(dir)
    }
}
