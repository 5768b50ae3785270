//! buildgit - Git repository queries for build scripts
//!
//! buildgit exposes a set of read-only Git queries ("aliases") that build
//! scripts can call: is this directory a repository, does it have uncommitted
//! changes, which branch is checked out, and so on. Every alias is a thin
//! pass-through to `git2`.
//!
//! # Architecture
//!
//! - [`context`] - Capabilities an alias receives from its host (file system, working directory)
//! - [`aliases`] - Public operations: validate, open, delegate
//! - [`git`] - Single interface for all Git operations
//! - [`core`] - Configuration and strong types
//! - [`cli`] - The `bgit` command-line front end
//! - [`ui`] - Output rendering
//!
//! # Invariants
//!
//! 1. Every alias checks its inputs and the path's existence before touching Git
//! 2. Repository handles never outlive the alias call that opened them
//! 3. Library errors are passed through, never reinterpreted
//!
//! # Example
//!
//! ```no_run
//! use buildgit::aliases::GitAliases;
//! use buildgit::context::ScriptContext;
//! use std::path::Path;
//!
//! let ctx = ScriptContext::from_current_dir()?;
//! if ctx.git_has_uncommitted_changes(Path::new("."))? {
//!     println!("working tree is dirty");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aliases;
pub mod cli;
pub mod context;
pub mod core;
pub mod git;
pub mod ui;
