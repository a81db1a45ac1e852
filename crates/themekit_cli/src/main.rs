//! Themekit CLI
//!
//! Command-line access to the theme engine's import boundary: validate and
//! normalize theme files, compare them, and inspect the built-in presets.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "themekit")]
#[command(about = "Validate, inspect and compare theme configs", long_about = None)]
#[command(version)]
struct Cli {
    /// Engine settings file (defaults to ./themekit.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical default config as JSON
    Defaults,

    /// Validate a theme JSON file and print its normalized form
    Validate {
        /// Theme config file
        file: PathBuf,
    },

    /// List the built-in presets
    Presets {
        /// Print full preset JSON instead of a summary table
        #[arg(long)]
        json: bool,
    },

    /// List the top-level fields that differ between two theme files
    Diff {
        a: PathBuf,
        b: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let engine_config = config::load_engine_config(cli.config.as_deref())?;

    let output = match &cli.command {
        Commands::Defaults => commands::defaults()?,
        Commands::Validate { file } => commands::validate(&engine_config, file)?,
        Commands::Presets { json } => commands::presets(*json)?,
        Commands::Diff { a, b } => commands::diff(&engine_config, a, b)?,
    };
    println!("{output}");

    Ok(())
}
