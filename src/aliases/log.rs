//! aliases::log

use std::path::Path;

use super::{with_repository, AliasError};
use crate::context::Context;
use crate::git::CommitInfo;

/// Get the commit HEAD points at.
///
/// # Errors
///
/// - [`AliasError::InvalidArgument`] if `path` is empty
/// - [`AliasError::RepositoryNotFound`] if `path` doesn't exist
/// - [`AliasError::Git`] wrapping [`crate::git::GitError::RefNotFound`] if
///   the repository has no commits yet
pub fn log_tip<C: Context + ?Sized>(context: &C, path: &Path) -> Result<CommitInfo, AliasError> {
    with_repository(context, path, |git| git.head_commit())
}
