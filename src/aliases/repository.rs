//! aliases::repository
//!
//! Repository validity and working tree queries.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{require_existing_directory, with_repository, AliasError};
use crate::context::Context;
use crate::git::{Git, StatusScope, WorktreeStatus};

/// Check if a directory is a valid Git repository.
///
/// `path` must be the repository itself (a work tree root, a `.git`
/// directory, or a bare repository); subdirectories of a work tree are not
/// repositories. No handle is kept open.
///
/// # Errors
///
/// - [`AliasError::InvalidArgument`] if `path` is empty
/// - [`AliasError::RepositoryNotFound`] if `path` doesn't exist
pub fn is_valid_repository<C: Context + ?Sized>(
    context: &C,
    path: &Path,
) -> Result<bool, AliasError> {
    let path = require_existing_directory(context, path)?;
    Ok(Git::is_valid(&path))
}

/// Check if a repository contains uncommitted changes.
///
/// Uses the context's status scope; by default untracked files count as
/// changes and ignored files never do, matching `git status`.
///
/// # Errors
///
/// - [`AliasError::InvalidArgument`] if `path` is empty
/// - [`AliasError::RepositoryNotFound`] if `path` doesn't exist
/// - [`AliasError::Git`] if `path` is not a repository or is bare
pub fn has_uncommitted_changes<C: Context + ?Sized>(
    context: &C,
    path: &Path,
) -> Result<bool, AliasError> {
    let status = worktree_status(context, path)?;
    Ok(status.is_dirty())
}

/// Check if a repository contains untracked files.
///
/// Always looks for untracked files, whatever the context's scope says.
pub fn has_untracked_files<C: Context + ?Sized>(
    context: &C,
    path: &Path,
) -> Result<bool, AliasError> {
    let scope = StatusScope {
        include_untracked: true,
        ..context.status_scope()
    };
    with_repository(context, path, |git| {
        Ok(git.worktree_status(scope)?.has_untracked())
    })
}

/// Check if a repository has changes staged in the index.
pub fn has_staged_changes<C: Context + ?Sized>(
    context: &C,
    path: &Path,
) -> Result<bool, AliasError> {
    let scope = context.status_scope();
    with_repository(context, path, |git| Ok(git.worktree_status(scope)?.has_staged()))
}

/// Get the working tree status summary of a repository.
pub fn worktree_status<C: Context + ?Sized>(
    context: &C,
    path: &Path,
) -> Result<WorktreeStatus, AliasError> {
    let scope = context.status_scope();
    let status = with_repository(context, path, |git| git.worktree_status(scope))?;
    debug!(path = %context.resolve(path).display(), %status, "worktree status");
    Ok(status)
}

/// Find the work tree root of the repository containing `path`.
///
/// Unlike the other aliases this walks up parent directories, so any
/// directory inside a work tree resolves to its root.
pub fn find_root_from_path<C: Context + ?Sized>(
    context: &C,
    path: &Path,
) -> Result<PathBuf, AliasError> {
    let path = require_existing_directory(context, path)?;
    Ok(Git::discover_workdir(&path)?)
}
