//! Hero config initialization.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration template generation

mod config;
mod validate;

use crate::{config::ProjectConfig, log};
use anyhow::{Context, Result};
use std::fs;

/// Write a starter `hero.toml`.
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_config(project: &ProjectConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    validate::validate_target(&project.config_path)?;

    let root = project.get_root();
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    config::write_config(&project.config_path)?;

    log!("init"; "wrote {}", project.config_path.display());
    Ok(())
}
