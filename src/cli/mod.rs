//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod list;
mod rewrite;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::loader::{load_config, merge_cli_overrides, CliOverrides};
use crate::config::EmojiConfig;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Custom emoji - check emoji directories and preview `:name:` tag substitution
#[derive(Parser)]
#[command(name = "emoji")]
#[command(about = "Custom emoji - load icon images and replace :name: tags with <img=ID> markup")]
#[command(version)]
pub struct Cli {
    /// Path to emoji.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every loaded emoji and registered icon to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report which images in a directory can be used as emoji
    Check {
        /// Directory holding emoji images
        dir: PathBuf,

        /// Accept only .png files
        #[arg(long)]
        strict: bool,
    },
    /// Load emoji and list their names with icon ids
    List {
        /// Directory holding emoji images (overrides emoji.toml)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Accept only .png files
        #[arg(long)]
        strict: bool,

        /// Length of the host icon table before emoji are added
        #[arg(long, default_value = "0")]
        base: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace :name: tags in text with icon markup
    Rewrite {
        /// Text to rewrite (multiple words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,

        /// Directory holding emoji images (overrides emoji.toml)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Accept only .png files
        #[arg(long)]
        strict: bool,

        /// Length of the host icon table before emoji are added
        #[arg(long, default_value = "0")]
        base: usize,
    },
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "customemoji=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load emoji.toml and apply command-line overrides.
fn resolve_config(
    config_path: Option<&Path>,
    dir: Option<PathBuf>,
    strict: bool,
) -> Result<EmojiConfig, ExitCode> {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };

    let overrides = CliOverrides { dir, strict: strict.then_some(true) };
    merge_cli_overrides(&mut config, &overrides);
    Ok(config)
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check { dir, strict } => check::run_check(&dir, strict),
        Commands::List { dir, strict, base, json } => {
            match resolve_config(cli.config.as_deref(), dir, strict) {
                Ok(config) => list::run_list(&config, base, json),
                Err(code) => code,
            }
        }
        Commands::Rewrite { text, dir, strict, base } => {
            match resolve_config(cli.config.as_deref(), dir, strict) {
                Ok(config) => rewrite::run_rewrite(&config, base, &text.join(" ")),
                Err(code) => code,
            }
        }
    }
}
