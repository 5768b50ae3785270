//! config command - Show the effective configuration

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::cli::Session;
use crate::core::config::Config;

/// Print the effective configuration as TOML.
pub fn show(session: &Session) -> Result<ExitCode> {
    let rendered = session
        .config
        .to_toml()
        .context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}

/// Print the config file in use, or where one would be read from.
pub fn path(session: &Session) -> Result<ExitCode> {
    match session.config.source_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            let canonical = Config::global_config_path().context("Failed to locate config")?;
            println!("{} (not present, using defaults)", canonical.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}
