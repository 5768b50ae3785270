//! context
//!
//! Capabilities an alias receives from its host.
//!
//! # Design
//!
//! Aliases never reach for the process environment directly. Everything they
//! need from the outside world comes through a [`Context`]:
//!
//! - a [`FileSystem`] used for the "does this directory exist?" precondition
//! - a working directory against which relative paths are resolved
//! - the status scope used by dirty-state queries
//!
//! The production implementation is [`ScriptContext`] over [`LocalFileSystem`].
//! Tests substitute a fake file system to drive the precondition paths.
//!
//! # Example
//!
//! ```no_run
//! use buildgit::context::{Context, ScriptContext};
//! use std::path::Path;
//!
//! let ctx = ScriptContext::from_current_dir()?;
//! let resolved = ctx.resolve(Path::new("vendor/lib"));
//! assert!(resolved.is_absolute());
//! # Ok::<(), std::io::Error>(())
//! ```

use std::path::{Path, PathBuf};

use crate::git::StatusScope;

/// File-system capability consumed by aliases.
pub trait FileSystem {
    /// Returns true if a directory exists at `path`.
    fn directory_exists(&self, path: &Path) -> bool;
}

/// The real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn directory_exists(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn directory_exists(&self, path: &Path) -> bool {
        (**self).directory_exists(path)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for Box<F> {
    fn directory_exists(&self, path: &Path) -> bool {
        (**self).directory_exists(path)
    }
}

/// Host context handed to every alias.
pub trait Context {
    /// The file system used for existence checks.
    fn file_system(&self) -> &dyn FileSystem;

    /// Directory that relative paths are resolved against.
    fn working_directory(&self) -> &Path;

    /// Which status entries count towards dirty-state queries.
    fn status_scope(&self) -> StatusScope {
        StatusScope::default()
    }

    /// Resolve `path` against the working directory.
    ///
    /// Absolute paths are returned unchanged.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_directory().join(path)
        }
    }
}

/// Context used by the CLI and by library callers running against the real
/// file system.
#[derive(Debug, Clone)]
pub struct ScriptContext<F = LocalFileSystem> {
    file_system: F,
    working_directory: PathBuf,
    status_scope: StatusScope,
}

impl ScriptContext<LocalFileSystem> {
    /// Create a context rooted at `working_directory`.
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self::with_file_system(LocalFileSystem, working_directory)
    }

    /// Create a context rooted at the process's current directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

impl<F: FileSystem> ScriptContext<F> {
    /// Create a context over an arbitrary file system.
    pub fn with_file_system(file_system: F, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            file_system,
            working_directory: working_directory.into(),
            status_scope: StatusScope::default(),
        }
    }

    /// Replace the status scope used by dirty-state queries.
    pub fn with_status_scope(mut self, scope: StatusScope) -> Self {
        self.status_scope = scope;
        self
    }
}

impl<F: FileSystem> Context for ScriptContext<F> {
    fn file_system(&self) -> &dyn FileSystem {
        &self.file_system
    }

    fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    fn status_scope(&self) -> StatusScope {
        self.status_scope
    }
}
