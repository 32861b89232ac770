//! `validate` command: report diagnostics for hero props and style tokens.

use anyhow::Result;

use crate::config::{ConfigError, ProjectConfig};
use crate::log;

/// Validate the loaded config.
///
/// With `warn_only`, errors are printed but the command still succeeds.
pub fn validate_config(config: &ProjectConfig, warn_only: bool) -> Result<()> {
    if config.has_file() {
        log!("validate"; "checking {}", config.config_path.display());
    }

    let diag = config.diagnostics();
    diag.print_warnings();

    let warnings = diag.warnings().len();
    match diag.into_result() {
        Ok(()) => {
            log!("validate"; "ok ({} warning{})", warnings, if warnings == 1 { "" } else { "s" });
            Ok(())
        }
        Err(errors) if warn_only => {
            log!("warning"; "{}", errors);
            Ok(())
        }
        Err(errors) => Err(ConfigError::Diagnostics(errors).into()),
    }
}
