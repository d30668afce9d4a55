//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Ensure the data directory exists, creating it when missing.
pub fn ensure_data_dir(data_dir: impl AsRef<Path>) -> anyhow::Result<()> {
    let dir = data_dir.as_ref();
    if dir.is_dir() {
        debug!(data_dir = %dir.display(), "data directory present");
        return Ok(());
    }
    if dir.exists() {
        return Err(anyhow::anyhow!("{} exists but is not a directory", dir.display()));
    }
    warn!(data_dir = %dir.display(), "data directory missing; creating it");
    std::fs::create_dir_all(dir).map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}
