//! Pre-initialization validation.

use anyhow::{Result, bail};
use std::path::Path;

/// Refuse to overwrite an existing config file.
pub fn validate_target(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it or pass a different path with --config.",
            config_path.display()
        );
    }
    Ok(())
}
