//! fullhero - responsive storefront hero banner renderer.

#![allow(dead_code)]

mod cli;
mod config;
mod hero;
mod logger;
mod markup;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Schema is static and needs no config file
    if let Commands::Schema { compact } = cli.command {
        return cli::schema::print_schema(compact);
    }

    let config = ProjectConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_config(&config, *dry),
        Commands::Render { args } => cli::render::render_hero(&config, args.output.as_deref()),
        Commands::Validate { warn_only, .. } => cli::validate::validate_config(&config, *warn_only),
        Commands::Schema { .. } => unreachable!("handled above"),
    }
}
