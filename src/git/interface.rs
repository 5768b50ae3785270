//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module is the **single doorway** to libgit2. Aliases never import
//! `git2` themselves; they receive a [`Git`] handle inside a scoped callback
//! or call the stateless [`Git::is_valid`] probe.
//!
//! # Opening Semantics
//!
//! [`Git::open`] opens the repository at exactly the given path. It does not
//! walk up to parent directories, so a subdirectory of a work tree is not
//! itself a repository. [`Git::discover_workdir`] is the one entry point that
//! searches upwards.
//!
//! # Error Handling
//!
//! git2 errors are normalized into [`GitError`]:
//! - [`GitError::NotARepo`]: The path is not a Git repository
//! - [`GitError::BareRepo`]: Operation needs a work tree but the repository is bare
//! - [`GitError::RefNotFound`]: Requested ref does not exist (including unborn HEAD)
//! - [`GitError::AccessError`]: Lock or permission failure
//! - [`GitError::Internal`]: Anything else libgit2 reports

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use super::Oid;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The path exists but is not a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was opened
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("operation requires a working tree but the repository is bare")]
    BareRepo,

    /// Requested ref does not exist.
    #[error("ref not found: {refname}")]
    RefNotFound {
        /// The ref that was not found
        refname: String,
    },

    /// Permission or filesystem error.
    #[error("repository access error: {message}")]
    AccessError {
        /// Description of the error
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Wrap a git2 error, keeping `context` in the message.
    ///
    /// Only bare and locked repositories get their own variants; every other
    /// code is passed through as [`GitError::Internal`].
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::BareRepo => GitError::BareRepo,
            git2::ErrorCode::Locked => GitError::AccessError {
                message: format!("{}: repository is locked: {}", context, err.message()),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }

    /// Wrap an error from resolving `refname`.
    ///
    /// A missing or unborn ref becomes [`GitError::RefNotFound`].
    fn from_ref_lookup(err: git2::Error, refname: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound | git2::ErrorCode::UnbornBranch => GitError::RefNotFound {
                refname: refname.to_string(),
            },
            _ => GitError::from_git2(err, refname),
        }
    }
}

/// Which entries a status query considers.
///
/// The default mirrors `git status`: untracked files are reported (recursing
/// into untracked directories), ignored files are not, submodules are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusScope {
    /// Report untracked files
    pub include_untracked: bool,
    /// Skip submodule entries entirely
    pub exclude_submodules: bool,
}

impl Default for StatusScope {
    fn default() -> Self {
        Self {
            include_untracked: true,
            exclude_submodules: false,
        }
    }
}

impl StatusScope {
    /// Scope that only looks at tracked files.
    pub fn tracked_only() -> Self {
        Self {
            include_untracked: false,
            ..Self::default()
        }
    }

    fn to_options(self) -> git2::StatusOptions {
        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(self.include_untracked)
            .recurse_untracked_dirs(self.include_untracked)
            .include_ignored(false)
            .exclude_submodules(self.exclude_submodules);
        opts
    }
}

/// Summary of working tree status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorktreeStatus {
    /// Number of staged changes
    pub staged: usize,
    /// Number of unstaged changes to tracked files
    pub unstaged: usize,
    /// Number of untracked files (zero when the scope excludes them)
    pub untracked: usize,
    /// Whether there are unresolved conflicts
    pub has_conflicts: bool,
}

impl WorktreeStatus {
    /// Check if anything would be reported by `git status`.
    ///
    /// Untracked files count when they were part of the query scope.
    ///
    /// # Example
    ///
    /// ```
    /// use buildgit::git::WorktreeStatus;
    ///
    /// assert!(!WorktreeStatus::default().is_dirty());
    /// let status = WorktreeStatus { untracked: 1, ..Default::default() };
    /// assert!(status.is_dirty());
    /// ```
    pub fn is_dirty(&self) -> bool {
        self.staged > 0 || self.unstaged > 0 || self.untracked > 0 || self.has_conflicts
    }

    /// Check if there are any staged changes ready to commit.
    pub fn has_staged(&self) -> bool {
        self.staged > 0
    }

    /// Check if there are untracked files.
    pub fn has_untracked(&self) -> bool {
        self.untracked > 0
    }
}

impl std::fmt::Display for WorktreeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_dirty() {
            return write!(f, "clean");
        }
        write!(
            f,
            "{} staged, {} unstaged, {} untracked",
            self.staged, self.unstaged, self.untracked
        )?;
        if self.has_conflicts {
            write!(f, ", conflicts")?;
        }
        Ok(())
    }
}

/// The branch HEAD points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchInfo {
    /// Short branch name; `None` when HEAD is detached
    pub name: Option<String>,
    /// Commit at the tip; `None` when the branch is unborn
    pub tip: Option<Oid>,
    /// Short name of the configured upstream, if any
    pub upstream: Option<String>,
    /// HEAD points directly at a commit
    pub detached: bool,
}

impl std::fmt::Display for BranchInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.name, &self.tip) {
            (Some(name), Some(tip)) => write!(f, "{} ({})", name, tip.short(7))?,
            (Some(name), None) => write!(f, "{} (unborn)", name)?,
            (None, Some(tip)) => write!(f, "(detached at {})", tip.short(7))?,
            (None, None) => write!(f, "(unknown)")?,
        }
        if let Some(upstream) = &self.upstream {
            write!(f, " -> {}", upstream)?;
        }
        Ok(())
    }
}

/// Information about a commit.
#[derive(Debug, Clone, Serialize)]
pub struct CommitInfo {
    /// The commit OID
    pub oid: Oid,
    /// First line of the commit message
    pub summary: String,
    /// Full commit message
    pub message: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Author timestamp
    pub author_time: chrono::DateTime<chrono::Utc>,
}

impl std::fmt::Display for CommitInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} <{}> {}",
            self.oid.short(7),
            self.author_name,
            self.author_email,
            self.summary
        )
    }
}

/// An open repository handle.
///
/// The handle owns the underlying `git2::Repository`; dropping it releases
/// libgit2's file handles and caches. Aliases only ever see a `&Git` inside
/// a callback, so it cannot outlive the call that opened it.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Drop for Git {
    fn drop(&mut self) {
        trace!(git_dir = %self.repo.path().display(), "releasing repository handle");
    }
}

impl Git {
    // =========================================================================
    // Repository Opening and Probing
    // =========================================================================

    /// Open the repository at exactly `path`.
    ///
    /// `path` may be a work tree root, a `.git` directory or a bare
    /// repository. Parent directories are not searched.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if `path` is not a repository
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::open(path).map_err(|e| match e.code() {
            git2::ErrorCode::NotFound => GitError::NotARepo {
                path: path.to_path_buf(),
            },
            _ => GitError::from_git2(e, &path.display().to_string()),
        })?;

        debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    /// Check whether `path` is a repository without keeping a handle.
    ///
    /// Never fails: anything libgit2 refuses to open is reported as `false`.
    pub fn is_valid(path: &Path) -> bool {
        let valid = git2::Repository::open_ext(
            path,
            git2::RepositoryOpenFlags::NO_SEARCH,
            std::iter::empty::<&OsStr>(),
        )
        .is_ok();

        debug!(path = %path.display(), valid, "probed repository");
        valid
    }

    /// Find the work tree root of the repository containing `path`.
    ///
    /// Walks up parent directories. For bare repositories the git directory
    /// is returned.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no enclosing repository exists
    pub fn discover_workdir(path: &Path) -> Result<PathBuf, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        let root = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        debug!(path = %path.display(), root = %root.display(), "discovered repository root");
        Ok(root)
    }

    /// Get direct access to the .git directory path.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    // =========================================================================
    // Working Tree Status
    // =========================================================================

    /// Get working tree status summary.
    ///
    /// # Errors
    ///
    /// - [`GitError::BareRepo`] if the repository has no work tree
    ///
    /// # Example
    ///
    /// ```ignore
    /// let status = git.worktree_status(StatusScope::default())?;
    /// if status.is_dirty() {
    ///     println!("Working tree has changes");
    /// }
    /// ```
    pub fn worktree_status(&self, scope: StatusScope) -> Result<WorktreeStatus, GitError> {
        if self.repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        let mut opts = scope.to_options();
        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(|e| GitError::from_git2(e, "status"))?;

        let mut result = WorktreeStatus::default();

        for entry in statuses.iter() {
            let status = entry.status();

            if status.is_conflicted() {
                result.has_conflicts = true;
            }

            if status.is_index_new()
                || status.is_index_modified()
                || status.is_index_deleted()
                || status.is_index_renamed()
                || status.is_index_typechange()
            {
                result.staged += 1;
            }

            if status.is_wt_modified()
                || status.is_wt_deleted()
                || status.is_wt_renamed()
                || status.is_wt_typechange()
            {
                result.unstaged += 1;
            }

            if status.is_wt_new() {
                result.untracked += 1;
            }
        }

        trace!(?result, "computed worktree status");
        Ok(result)
    }

    // =========================================================================
    // HEAD Queries
    // =========================================================================

    /// Describe the branch HEAD points at.
    ///
    /// Works for unborn branches (fresh repositories) and detached HEADs.
    pub fn current_branch(&self) -> Result<BranchInfo, GitError> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                return self.unborn_branch();
            }
            Err(e) => return Err(GitError::from_ref_lookup(e, "HEAD")),
        };

        let tip = head.target().map(Oid::from);

        if !head.is_branch() {
            return Ok(BranchInfo {
                name: None,
                tip,
                upstream: None,
                detached: true,
            });
        }

        let name = head.shorthand().map(str::to_string);
        let upstream = git2::Branch::wrap(head)
            .upstream()
            .ok()
            .and_then(|up| up.name().ok().flatten().map(str::to_string));

        Ok(BranchInfo {
            name,
            tip,
            upstream,
            detached: false,
        })
    }

    /// HEAD names a branch that has no commits yet.
    fn unborn_branch(&self) -> Result<BranchInfo, GitError> {
        let head = self
            .repo
            .find_reference("HEAD")
            .map_err(|e| GitError::from_ref_lookup(e, "HEAD"))?;

        let name = head
            .symbolic_target()
            .map(|target| target.strip_prefix("refs/heads/").unwrap_or(target).to_string());

        Ok(BranchInfo {
            name,
            tip: None,
            upstream: None,
            detached: false,
        })
    }

    /// Get the commit HEAD points at.
    ///
    /// # Errors
    ///
    /// - [`GitError::RefNotFound`] if HEAD is unborn (new repository)
    pub fn head_commit(&self) -> Result<CommitInfo, GitError> {
        let commit = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| GitError::from_ref_lookup(e, "HEAD"))?;

        let author = commit.author();
        let author_time = chrono::DateTime::from_timestamp(author.when().seconds(), 0)
            .unwrap_or(chrono::DateTime::UNIX_EPOCH)
            .with_timezone(&chrono::Utc);

        Ok(CommitInfo {
            oid: commit.id().into(),
            summary: commit.summary().unwrap_or("").to_string(),
            message: commit.message().unwrap_or("").to_string(),
            author_name: author.name().unwrap_or("").to_string(),
            author_email: author.email().unwrap_or("").to_string(),
            author_time,
        })
    }
}
