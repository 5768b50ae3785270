//! Integration tests for the `bgit` binary.
//!
//! These tests run the CLI against real git repositories and check stdout,
//! stderr, and exit codes.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Test fixture that creates a real git repository with one commit.
struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let mut opts = git2::RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = git2::Repository::init_opts(dir.path(), &opts).unwrap();

        std::fs::write(dir.path().join("README.md"), "# Test Repo\n").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("README.md")).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();

        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Get a command for running bgit with an isolated configuration.
fn bgit(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bgit").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("BUILDGIT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag_works() {
    let home = TempDir::new().unwrap();
    bgit(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build scripts"));
}

#[test]
fn version_flag_works() {
    let home = TempDir::new().unwrap();
    bgit(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bgit"));
}

#[test]
fn is_valid_prints_true_for_repository() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();
    bgit(home.path())
        .arg("is-valid")
        .arg(repo.path())
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn is_valid_prints_false_for_plain_directory() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    bgit(home.path())
        .arg("is-valid")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn missing_path_is_an_error() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    bgit(home.path())
        .arg("is-valid")
        .arg(dir.path().join("missing"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("doesn't exist"));
}

#[test]
fn is_dirty_on_plain_directory_reports_not_a_repository() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    bgit(home.path())
        .arg("is-dirty")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn is_dirty_tracks_modifications() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();

    bgit(home.path())
        .arg("is-dirty")
        .arg(repo.path())
        .assert()
        .success()
        .stdout("false\n");

    std::fs::write(repo.path().join("README.md"), "# Changed\n").unwrap();

    bgit(home.path())
        .arg("is-dirty")
        .arg(repo.path())
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn check_flag_uses_exit_code() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();

    bgit(home.path())
        .args(["is-dirty", "--check"])
        .arg(repo.path())
        .assert()
        .code(2)
        .stdout("");

    std::fs::write(repo.path().join("new.txt"), "new\n").unwrap();

    bgit(home.path())
        .args(["is-dirty", "--check"])
        .arg(repo.path())
        .assert()
        .code(0)
        .stdout("");

    bgit(home.path())
        .args(["is-dirty", "--check", "--tracked-only"])
        .arg(repo.path())
        .assert()
        .code(2);
}

#[test]
fn config_file_narrows_status_scope() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".buildgit");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[status]\ninclude_untracked = false\n",
    )
    .unwrap();

    let repo = TestRepo::new();
    std::fs::write(repo.path().join("new.txt"), "new\n").unwrap();

    bgit(home.path())
        .arg("is-dirty")
        .arg(repo.path())
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    std::fs::write(&config, "[output]\nformat = \"xml\"\n").unwrap();

    let repo = TestRepo::new();
    bgit(home.path())
        .env("BUILDGIT_CONFIG", &config)
        .arg("is-valid")
        .arg(repo.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid output format"));
}

#[test]
fn relative_path_uses_cwd_flag() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();
    let parent = repo.path().parent().unwrap();
    let name = repo.path().file_name().unwrap();

    bgit(home.path())
        .arg("--cwd")
        .arg(parent)
        .arg("is-valid")
        .arg(name)
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn status_as_json() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();
    std::fs::write(repo.path().join("new.txt"), "new\n").unwrap();

    let output = bgit(home.path())
        .args(["status", "--json"])
        .arg(repo.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["untracked"], 1);
    assert_eq!(value["staged"], 0);
}

#[test]
fn branch_prints_name() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();
    bgit(home.path())
        .arg("branch")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("main ("));
}

#[test]
fn tip_prints_summary() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();
    bgit(home.path())
        .arg("tip")
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial commit"));
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    bgit(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("include_untracked = true"));
}

#[test]
fn completion_generates_script() {
    let home = TempDir::new().unwrap();
    bgit(home.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bgit"));
}
