//! cli
//!
//! Command-line interface layer for bgit.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the log subscriber
//! - Load configuration and build the alias context
//! - Delegate to command handlers
//!
//! # Exit Codes
//!
//! - `0`: success (or "yes" for `--check`)
//! - `1`: error, reported on stderr
//! - `2`: "no" for `--check`

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::context::ScriptContext;
use crate::core::config::Config;
use crate::git::StatusScope;
use crate::ui::output::{OutputFormat, Verbosity};

/// Settings for one bgit invocation, derived from flags and config.
#[derive(Debug, Clone)]
pub struct Session {
    /// Directory relative paths are resolved against.
    pub cwd: PathBuf,
    /// Output format for results.
    pub format: OutputFormat,
    /// Log verbosity.
    pub verbosity: Verbosity,
    /// Loaded configuration.
    pub config: Config,
}

impl Session {
    /// Build the alias context, optionally narrowing status to tracked files.
    pub fn context(&self, tracked_only: bool) -> ScriptContext {
        let scope = if tracked_only {
            StatusScope {
                include_untracked: false,
                ..self.config.status_scope()
            }
        } else {
            self.config.status_scope()
        };
        ScriptContext::new(&self.cwd).with_status_scope(scope)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    init_logging(verbosity);

    let config = Config::load().context("Failed to load configuration")?;
    let cwd = match cli.cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::from_config(config.output_format())
    };

    let session = Session {
        cwd,
        format,
        verbosity,
        config,
    };

    commands::dispatch(cli.command, &session)
}

/// Install a stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
fn init_logging(verbosity: Verbosity) {
    let default_level = match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Debug => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("buildgit={default_level}")));

    // Already installed when run() is called twice in one process (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
