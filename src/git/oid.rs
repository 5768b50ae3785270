//! git::oid
//!
//! Object ids as handed out to aliases.

use serde::Serialize;

/// A commit id read from a repository, stored as lowercase hex.
///
/// Only the `git` module creates these, always from an id libgit2 produced,
/// so there is no fallible constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Oid(String);

impl Oid {
    /// Abbreviate to the first `len` hex digits, or the full id if shorter.
    pub fn short(&self, len: usize) -> &str {
        &self.0[..len.min(self.0.len())]
    }

    /// Full hex form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<git2::Oid> for Oid {
    fn from(oid: git2::Oid) -> Self {
        Self(oid.to_string())
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
