//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module imports
//! `git2`. We use the `git2` crate exclusively (no shelling out to the git
//! CLI), with libgit2 vendored.
//!
//! # Responsibilities
//!
//! - Stateless repository probing
//! - Opening a scoped repository handle at an exact path
//! - Repository root discovery
//! - Working tree status
//! - HEAD branch and tip commit queries
//!
//! # Example
//!
//! ```no_run
//! use buildgit::git::{Git, StatusScope};
//! use std::path::Path;
//!
//! let path = Path::new("/path/to/repo");
//! if Git::is_valid(path) {
//!     let git = Git::open(path)?;
//!     let status = git.worktree_status(StatusScope::default())?;
//!     println!("{}", status);
//! }
//! # Ok::<(), buildgit::git::GitError>(())
//! ```

mod interface;
mod oid;

pub use interface::{BranchInfo, CommitInfo, Git, GitError, StatusScope, WorktreeStatus};
pub use oid::Oid;
