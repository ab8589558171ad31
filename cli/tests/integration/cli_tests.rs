//! Integration tests for the pwp binary: argument parsing and early failures.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `pwp` with a scrubbed environment and a config path that does not exist.
fn pwp(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pwp"));
    cmd.env("NO_COLOR", "1")
        .env("PWP_CONFIG", home.path().join("config.yaml"))
        .env_remove("PWP_HOST")
        .env_remove("PWP_PORT")
        .env_remove("PWP_PATH")
        .env_remove("PWP_PHP")
        .env_remove("RUST_LOG");
    cmd
}

fn home() -> TempDir {
    TempDir::new().expect("tempdir")
}

// --- Help and version ---

#[test]
fn test_help_lists_flags() {
    let home = home();
    pwp(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--path"))
        .stdout(predicate::str::contains("--php"));
}

#[test]
fn test_version_flag_shows_version() {
    let home = home();
    pwp(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pwp"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// --- Argument validation ---

#[test]
fn test_invalid_port_is_rejected_by_the_parser() {
    let home = home();
    pwp(&home)
        .args(["--port", "eighty"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid port"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let home = home();
    pwp(&home).arg("--frobnicate").assert().code(2);
}

#[test]
fn test_malformed_config_file_fails() {
    let home = home();
    std::fs::write(home.path().join("config.yaml"), "sources: [oops").expect("write");
    pwp(&home)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot load configuration"));
}

// --- Serving an existing installation ---

#[test]
fn test_missing_php_is_fatal_for_existing_install() {
    let home = home();
    let site = home.path().join("site");
    std::fs::create_dir_all(&site).expect("mkdir");

    pwp(&home)
        .args(["--port", "8123", "--no-browser", "--php", "/nonexistent/php"])
        .arg("--path")
        .arg(&site)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: could not start PHP server"));
}

#[test]
fn test_legacy_single_dash_flags_are_accepted() {
    let home = home();
    let site = home.path().join("site");
    std::fs::create_dir_all(&site).expect("mkdir");

    pwp(&home)
        .args(["-port", "8124", "--no-browser", "-php", "/nonexistent/php", "-path"])
        .arg(&site)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not start PHP server (/nonexistent/php)"));
}

#[test]
fn test_env_overrides_apply() {
    let home = home();
    let site = home.path().join("site");
    std::fs::create_dir_all(&site).expect("mkdir");

    pwp(&home)
        .env("PWP_PORT", "8125")
        .env("PWP_PATH", &site)
        .env("PWP_PHP", "/nonexistent/php-env")
        .arg("--no-browser")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/php-env"));
}

#[test]
fn test_quiet_existing_install_prints_nothing_on_stdout() {
    let home = home();
    let site = home.path().join("site");
    std::fs::create_dir_all(&site).expect("mkdir");

    pwp(&home)
        .args(["-q", "--port", "8126", "--no-browser", "--php", "/nonexistent/php"])
        .arg("--path")
        .arg(&site)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}
