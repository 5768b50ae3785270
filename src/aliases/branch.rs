//! aliases::branch

use std::path::Path;

use super::{with_repository, AliasError};
use crate::context::Context;
use crate::git::BranchInfo;

/// Get the branch currently checked out in a repository.
///
/// Fresh repositories report their unborn branch with no tip; a detached
/// HEAD reports no name.
///
/// # Errors
///
/// - [`AliasError::InvalidArgument`] if `path` is empty
/// - [`AliasError::RepositoryNotFound`] if `path` doesn't exist
/// - [`AliasError::Git`] if `path` is not a repository
pub fn branch_current<C: Context + ?Sized>(
    context: &C,
    path: &Path,
) -> Result<BranchInfo, AliasError> {
    with_repository(context, path, |git| git.current_branch())
}
