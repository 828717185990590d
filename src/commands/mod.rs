pub mod export;
pub mod inspect;
pub mod learn;

use anyhow::{anyhow, Result};

use crate::store::ProfileStore;
use crate::types::StyleProfile;

/// Load a profile that must already exist.
pub(crate) fn require_profile(store: &ProfileStore, name: &str) -> Result<StyleProfile> {
    store.load(name)?.ok_or_else(|| {
        anyhow!(
            "profile not found: {} (create it with `style-profile learn <source> --profile {}`)",
            name,
            name
        )
    })
}
