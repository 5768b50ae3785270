//! Property-based tests for the alias layer.
//!
//! These tests use proptest to check that alias answers are stable and
//! follow the working tree contents across generated inputs.

use std::path::Path;

use proptest::prelude::*;
use tempfile::TempDir;

use buildgit::aliases::{AliasError, GitAliases};
use buildgit::context::ScriptContext;

/// Strategy for file names that git will treat as ordinary untracked files.
fn file_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}\\.txt"
}

/// Strategy for relative path segments.
fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Dirty iff at least one untracked file was written; asking twice
    /// gives the same answer.
    #[test]
    fn dirty_state_follows_untracked_files(
        files in prop::collection::vec((file_name(), "[ -~]{0,32}"), 0..5)
    ) {
        let dir = TempDir::new().unwrap();
        git2::Repository::init(dir.path()).unwrap();
        for (name, content) in &files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }

        let ctx = ScriptContext::new(dir.path());
        let first = ctx.git_has_uncommitted_changes(dir.path()).unwrap();
        let second = ctx.git_has_uncommitted_changes(dir.path()).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first, !files.is_empty());
        prop_assert!(ctx.git_is_valid_repository(dir.path()).unwrap());
    }

    /// Any path below an empty directory is reported missing, never opened.
    #[test]
    fn missing_paths_are_not_found(segments in prop::collection::vec(segment(), 1..4)) {
        let dir = TempDir::new().unwrap();
        let ctx = ScriptContext::new(dir.path());
        let relative = segments.join("/");

        let result = ctx.git_is_valid_repository(Path::new(&relative));
        let is_not_found = matches!(result, Err(AliasError::RepositoryNotFound { .. }));
        prop_assert!(is_not_found);

        let result = ctx.git_has_uncommitted_changes(Path::new(&relative));
        let is_not_found = matches!(result, Err(AliasError::RepositoryNotFound { .. }));
        prop_assert!(is_not_found);
    }
}
