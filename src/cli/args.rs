//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Full Hero banner renderer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: hero.toml)
    #[arg(short = 'C', long, global = true, default_value = "hero.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter hero.toml
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Render the hero to HTML
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Print the page-builder schema as JSON
    #[command(visible_alias = "s")]
    Schema {
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Check hero props and style tokens
    #[command(visible_alias = "v")]
    Validate {
        /// JSON props file overriding the `[hero]` section
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        props: Option<PathBuf>,

        /// Treat validation failures as warnings instead of errors
        #[arg(long, short = 'w')]
        warn_only: bool,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// JSON props file overriding the `[hero]` section
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub props: Option<PathBuf>,

    /// Viewport width in CSS pixels (overrides `render.viewport_width`)
    #[arg(short = 'W', long, conflicts_with = "headless")]
    pub viewport_width: Option<u32>,

    /// Render without a viewport, as a server would
    #[arg(long)]
    pub headless: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }

    /// Props file given on the command line, if any.
    pub fn props(&self) -> Option<&PathBuf> {
        match &self.command {
            Commands::Render { args } => args.props.as_ref(),
            Commands::Validate { props, .. } => props.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from(["fullhero", "render", "-W", "1200", "-o", "out.html"]);
        let Commands::Render { args } = &cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.viewport_width, Some(1200));
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert!(!args.headless);
        assert_eq!(cli.config, PathBuf::from("hero.toml"));
    }

    #[test]
    fn test_headless_conflicts_with_width() {
        let result = Cli::try_parse_from(["fullhero", "render", "--headless", "-W", "800"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["fullhero", "validate", "-C", "banners/home.toml", "--props", "p.json"]);
        assert_eq!(cli.config, PathBuf::from("banners/home.toml"));
        assert_eq!(cli.props(), Some(&PathBuf::from("p.json")));
        assert!(!cli.is_init());
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from(["fullhero", "init", "site", "--dry"]);
        assert!(cli.is_init());
        assert!(matches!(cli.command, Commands::Init { dry: true, .. }));
    }
}
