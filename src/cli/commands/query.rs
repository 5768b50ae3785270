//! query commands - one alias per command

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::aliases::GitAliases;
use crate::cli::args::CheckArgs;
use crate::cli::Session;
use crate::ui::output;

/// Exit code for a "no" answer under `--check`.
const CHECK_NO: u8 = 2;

/// Report a yes/no answer, either printed or as the exit code.
fn answer(session: &Session, args: &CheckArgs, value: bool) -> Result<ExitCode> {
    if args.check {
        return Ok(if value {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(CHECK_NO)
        });
    }
    output::print(&value, session.format)?;
    Ok(ExitCode::SUCCESS)
}

/// `bgit is-valid`
pub fn is_valid(session: &Session, args: &CheckArgs) -> Result<ExitCode> {
    let ctx = session.context(false);
    let value = ctx
        .git_is_valid_repository(&args.path)
        .with_context(|| format!("Failed to check '{}'", args.path.display()))?;
    answer(session, args, value)
}

/// `bgit is-dirty`
pub fn is_dirty(session: &Session, args: &CheckArgs, tracked_only: bool) -> Result<ExitCode> {
    let ctx = session.context(tracked_only);
    let value = ctx
        .git_has_uncommitted_changes(&args.path)
        .with_context(|| format!("Failed to read status of '{}'", args.path.display()))?;
    answer(session, args, value)
}

/// `bgit has-untracked`
pub fn has_untracked(session: &Session, args: &CheckArgs) -> Result<ExitCode> {
    let ctx = session.context(false);
    let value = ctx
        .git_has_untracked_files(&args.path)
        .with_context(|| format!("Failed to read status of '{}'", args.path.display()))?;
    answer(session, args, value)
}

/// `bgit has-staged`
pub fn has_staged(session: &Session, args: &CheckArgs) -> Result<ExitCode> {
    let ctx = session.context(false);
    let value = ctx
        .git_has_staged_changes(&args.path)
        .with_context(|| format!("Failed to read status of '{}'", args.path.display()))?;
    answer(session, args, value)
}

/// `bgit status`
pub fn status(session: &Session, path: &Path, tracked_only: bool) -> Result<ExitCode> {
    let ctx = session.context(tracked_only);
    let status = ctx
        .git_worktree_status(path)
        .with_context(|| format!("Failed to read status of '{}'", path.display()))?;
    output::print(&status, session.format)?;
    Ok(ExitCode::SUCCESS)
}

/// `bgit branch`
pub fn branch(session: &Session, path: &Path) -> Result<ExitCode> {
    let ctx = session.context(false);
    let info = ctx
        .git_branch_current(path)
        .with_context(|| format!("Failed to read branch of '{}'", path.display()))?;
    output::print(&info, session.format)?;
    Ok(ExitCode::SUCCESS)
}

/// `bgit tip`
pub fn tip(session: &Session, path: &Path) -> Result<ExitCode> {
    let ctx = session.context(false);
    let commit = ctx
        .git_log_tip(path)
        .with_context(|| format!("Failed to read HEAD commit of '{}'", path.display()))?;
    output::print(&commit, session.format)?;
    Ok(ExitCode::SUCCESS)
}

/// `bgit root`
pub fn root(session: &Session, path: &Path) -> Result<ExitCode> {
    let ctx = session.context(false);
    let root = ctx
        .git_find_root_from_path(path)
        .with_context(|| format!("Failed to find repository containing '{}'", path.display()))?;
    output::print(&root.display().to_string(), session.format)?;
    Ok(ExitCode::SUCCESS)
}
