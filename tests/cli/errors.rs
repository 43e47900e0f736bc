//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("keyrotor") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "keyrotor");
}

#[test]
fn test_unknown_provider() {
    let t = Test::new();

    t.cmd()
        .args(["select", "--provider", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown provider: nope"))
        .stderr(predicate::str::contains("keyrotor providers"));
}

#[test]
fn test_invalid_prefix() {
    let t = Test::with_vars(&[("BAD", "x")]);

    t.cmd()
        .args(["select", "--prefix", "BAD-PREFIX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid prefix"));
}

#[test]
fn test_invalid_output_name() {
    let t = Test::with_vars(&[("KEY", "x")]);

    let output = t.select(&["--prefix", "KEY", "--output-name", "a=b"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid output name");
    assert_eq!(t.read_env_file(), "");
}

#[test]
fn test_non_numeric_seed_rejected_by_parser() {
    let t = Test::with_vars(&[("KEY", "x")]);

    t.cmd()
        .args(["select", "--prefix", "KEY", "--seed", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a base-10 integer"));
    assert_eq!(t.read_env_file(), "");
}

#[test]
fn test_malformed_config() {
    let t = Test::with_vars(&[("API_KEY", "x")]);
    t.write_config("this is not valid toml { [ }");

    let output = t.select(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_missing_explicit_config() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--config", "does-not-exist.toml", "providers"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_keyrotor") || out.contains("complete"));
}

#[test]
fn test_completions_ignore_broken_config() {
    let t = Test::new();
    t.write_config("not toml {");

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "#compdef");
}
