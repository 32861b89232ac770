//! Hero configuration management for `hero.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [render]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file lookup
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                           |
//! |-------------|---------------------------------------------------|
//! | `[hero]`    | Hero props, same camelCase keys as the schema     |
//! | `[styles]`  | Class-name tokens suffixed with `blockClass`      |
//! | `[render]`  | Preview viewport for the `render` command         |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::RenderConfig;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, RenderArgs},
    hero::{HeroConfig, StyleTokens},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing hero.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory containing the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Hero props
    #[serde(default)]
    pub hero: HeroConfig,

    /// Class-name tokens
    #[serde(default)]
    pub styles: StyleTokens,

    /// Preview settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl ProjectConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A props file given on the
    /// command line replaces `[hero]` and makes the config file optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let (config_path, exists) = Self::resolve_config_path(cli, &cwd);

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else if cli.is_init() || cli.props().is_some() {
            Self::default()
        } else {
            bail!(ConfigError::NotFound(cli.config.clone()));
        };

        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone());
        config.config_path = config_path;

        if let Some(props) = cli.props() {
            config.hero = Self::load_props(&cwd.join(props))?;
        }

        config.apply_command_options(cli);
        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> (PathBuf, bool) {
        match &cli.command {
            Commands::Init { name, .. } => {
                let dir = name.as_ref().map_or_else(|| cwd.to_path_buf(), |n| cwd.join(n));
                let path = dir.join(&cli.config);
                let exists = path.exists();
                (path, exists)
            }
            _ => match find_config_file(cwd, &cli.config) {
                Some(path) => (path, true),
                None => (cwd.join(&cli.config), false),
            },
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Read camelCase JSON props, as exported by the page builder.
    pub fn load_props(path: &Path) -> Result<HeroConfig> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let props = serde_json::from_str(&content)
            .map_err(ConfigError::from)
            .with_context(|| format!("invalid props in {}", path.display()))?;
        Ok(props)
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Whether the config was read from disk.
    pub fn has_file(&self) -> bool {
        self.config_path.exists()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        if let Commands::Render { args } = &cli.command {
            self.apply_render_args(args);
        }
    }

    /// `--headless` clears the viewport, `--viewport-width` replaces it.
    fn apply_render_args(&mut self, args: &RenderArgs) {
        if args.headless {
            self.render.viewport_width = None;
        } else {
            Self::update_option(&mut self.render.viewport_width, args.viewport_width.map(Some).as_ref());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect diagnostics for every section.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.hero.validate(&mut diag);
        self.styles.validate(&mut diag);
        self.render.validate(&mut diag);
        diag
    }

    /// Validate configuration, printing warnings and returning all errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProjectConfig {
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
