//! aliases
//!
//! Public Git queries for build scripts.
//!
//! # Shape
//!
//! Every alias follows the same three steps:
//!
//! 1. Validate inputs ([`AliasError::InvalidArgument`])
//! 2. Check the path exists through the context's file system
//!    ([`AliasError::RepositoryNotFound`])
//! 3. Delegate one call to [`crate::git`], either the stateless
//!    [`Git::is_valid`] probe or a scoped handle from [`with_repository`]
//!
//! Errors raised by Git itself arrive as [`AliasError::Git`] unchanged.
//!
//! # Calling Styles
//!
//! Aliases are free functions taking the context first, and are also
//! available as methods on any [`Context`] through [`GitAliases`]:
//!
//! ```no_run
//! use buildgit::aliases::{self, GitAliases};
//! use buildgit::context::ScriptContext;
//! use std::path::Path;
//!
//! let ctx = ScriptContext::from_current_dir()?;
//! let a = aliases::is_valid_repository(&ctx, Path::new("."))?;
//! let b = ctx.git_is_valid_repository(Path::new("."))?;
//! assert_eq!(a, b);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod branch;
mod log;
mod repository;

pub use branch::branch_current;
pub use log::log_tip;
pub use repository::{
    find_root_from_path, has_staged_changes, has_uncommitted_changes, has_untracked_files,
    is_valid_repository, worktree_status,
};

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::context::Context;
use crate::git::{BranchInfo, CommitInfo, Git, GitError, WorktreeStatus};

/// Errors from alias calls.
#[derive(Debug, Error)]
pub enum AliasError {
    /// A required argument was missing.
    #[error("missing required argument: {name}")]
    InvalidArgument {
        /// Name of the argument
        name: &'static str,
    },

    /// The path does not exist.
    #[error("path '{path}' doesn't exist")]
    RepositoryNotFound {
        /// The resolved path that was checked
        path: PathBuf,
    },

    /// Git rejected the operation.
    #[error(transparent)]
    Git(#[from] GitError),
}

impl AliasError {
    /// The path exists but Git does not recognize it as a repository.
    pub fn is_not_a_repository(&self) -> bool {
        matches!(self, AliasError::Git(GitError::NotARepo { .. }))
    }
}

/// Run the shared preconditions and return the resolved path.
///
/// # Errors
///
/// - [`AliasError::InvalidArgument`] if `path` is empty
/// - [`AliasError::RepositoryNotFound`] if no directory exists at `path`
pub fn require_existing_directory<C: Context + ?Sized>(
    context: &C,
    path: &Path,
) -> Result<PathBuf, AliasError> {
    if path.as_os_str().is_empty() {
        return Err(AliasError::InvalidArgument { name: "path" });
    }

    let resolved = context.resolve(path);
    if !context.file_system().directory_exists(&resolved) {
        debug!(path = %resolved.display(), "path does not exist");
        return Err(AliasError::RepositoryNotFound { path: resolved });
    }

    Ok(resolved)
}

/// Run `operation` against the repository at `path`.
///
/// Performs the shared preconditions, opens a handle at exactly the resolved
/// path, passes it to `operation`, and releases it before returning, whether
/// `operation` succeeded, failed, or panicked. The operation's value is
/// returned unchanged.
///
/// # Errors
///
/// - The preconditions of [`require_existing_directory`]
/// - [`GitError::NotARepo`] if the directory is not a repository
/// - Anything `operation` returns
///
/// # Example
///
/// ```no_run
/// use buildgit::aliases::with_repository;
/// use buildgit::context::ScriptContext;
/// use std::path::Path;
///
/// let ctx = ScriptContext::from_current_dir()?;
/// let git_dir = with_repository(&ctx, Path::new("."), |git| Ok(git.git_dir().to_path_buf()))?;
/// println!("{}", git_dir.display());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn with_repository<C, T, F>(context: &C, path: &Path, operation: F) -> Result<T, AliasError>
where
    C: Context + ?Sized,
    F: FnOnce(&Git) -> Result<T, GitError>,
{
    let path = require_existing_directory(context, path)?;
    let git = Git::open(&path)?;
    let result = operation(&git);
    drop(git);
    Ok(result?)
}

/// Aliases as methods on a host context.
///
/// Implemented for every [`Context`], so the context argument can never be
/// left out.
pub trait GitAliases: Context {
    /// See [`is_valid_repository`].
    fn git_is_valid_repository(&self, path: &Path) -> Result<bool, AliasError> {
        is_valid_repository(self, path)
    }

    /// See [`has_uncommitted_changes`].
    fn git_has_uncommitted_changes(&self, path: &Path) -> Result<bool, AliasError> {
        has_uncommitted_changes(self, path)
    }

    /// See [`has_untracked_files`].
    fn git_has_untracked_files(&self, path: &Path) -> Result<bool, AliasError> {
        has_untracked_files(self, path)
    }

    /// See [`has_staged_changes`].
    fn git_has_staged_changes(&self, path: &Path) -> Result<bool, AliasError> {
        has_staged_changes(self, path)
    }

    /// See [`worktree_status`].
    fn git_worktree_status(&self, path: &Path) -> Result<WorktreeStatus, AliasError> {
        worktree_status(self, path)
    }

    /// See [`branch_current`].
    fn git_branch_current(&self, path: &Path) -> Result<BranchInfo, AliasError> {
        branch_current(self, path)
    }

    /// See [`log_tip`].
    fn git_log_tip(&self, path: &Path) -> Result<CommitInfo, AliasError> {
        log_tip(self, path)
    }

    /// See [`find_root_from_path`].
    fn git_find_root_from_path(&self, path: &Path) -> Result<PathBuf, AliasError> {
        find_root_from_path(self, path)
    }
}

impl<C: Context + ?Sized> GitAliases for C {}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::Cell;
    use std::path::{Path, PathBuf};

    use crate::context::{Context, FileSystem};

    /// File system that answers a fixed value and counts calls.
    pub struct FixedFileSystem {
        pub exists: bool,
        pub calls: Cell<usize>,
    }

    impl FileSystem for FixedFileSystem {
        fn directory_exists(&self, _path: &Path) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.exists
        }
    }

    pub struct FakeContext {
        pub fs: FixedFileSystem,
        pub cwd: PathBuf,
    }

    impl FakeContext {
        pub fn new(exists: bool) -> Self {
            Self {
                fs: FixedFileSystem {
                    exists,
                    calls: Cell::new(0),
                },
                cwd: PathBuf::from("/fake/work"),
            }
        }
    }

    impl Context for FakeContext {
        fn file_system(&self) -> &dyn FileSystem {
            &self.fs
        }

        fn working_directory(&self) -> &Path {
            &self.cwd
        }
    }
}
