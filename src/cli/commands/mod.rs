//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds the alias context from the session
//! 2. Calls exactly one alias
//! 3. Formats and displays the result
//!
//! Handlers never touch `git2`; everything goes through [`crate::aliases`].

mod completion;
mod config_cmd;
mod query;

pub use completion::completion;
pub use query::{branch, has_staged, has_untracked, is_dirty, is_valid, root, status, tip};

use std::process::ExitCode;

use anyhow::Result;

use super::args::{Command, ConfigAction};
use super::Session;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, session: &Session) -> Result<ExitCode> {
    match command {
        Command::IsValid { args } => is_valid(session, &args),
        Command::IsDirty { args, tracked_only } => is_dirty(session, &args, tracked_only),
        Command::HasUntracked { args } => has_untracked(session, &args),
        Command::HasStaged { args } => has_staged(session, &args),
        Command::Status { path, tracked_only } => status(session, &path, tracked_only),
        Command::Branch { path } => branch(session, &path),
        Command::Tip { path } => tip(session, &path),
        Command::Root { path } => root(session, &path),
        Command::Config { action } => match action {
            ConfigAction::Show => config_cmd::show(session),
            ConfigAction::Path => config_cmd::path(session),
        },
        Command::Completion { shell } => completion(shell),
    }
}
