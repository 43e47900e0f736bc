//! Tests for `keyrotor seed`.

use crate::support::*;

const RUN: &[(&str, &str)] = &[
    ("GITHUB_RUN_ID", "8812345678"),
    ("GITHUB_RUN_NUMBER", "41"),
    ("GITHUB_SHA", "9fceb02d0ae598e95dc970b74767f19372d61af8"),
    ("GITHUB_RUN_ATTEMPT", "1"),
    ("GITHUB_WORKFLOW", "CI"),
    ("GITHUB_JOB", "test"),
];

fn seed_for(t: &Test) -> u64 {
    let output = t.seed(&[]);
    assert_success(&output);
    stdout(&output).trim().parse().expect("seed is an integer")
}

#[test]
fn test_seed_explicit() {
    let t = Test::with_vars(RUN);

    let output = t.seed(&["--seed", "12345"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "12345\n");
    assert_stderr_contains(&output, "explicit");
}

#[test]
fn test_seed_explicit_negative_wraps() {
    let t = Test::with_vars(RUN);

    t.cmd()
        .args(["seed", "--seed", "-1"])
        .assert()
        .success()
        .stdout("18446744073709551615\n");
}

#[test]
fn test_seed_explicit_matches_override_rule() {
    let mut t = Test::with_vars(RUN);
    t.set_var("ROTATION_SEED", "340282366920938463463374607431768211463");
    assert_eq!(seed_for(&t), 7);

    let t = Test::with_vars(RUN);
    t.cmd()
        .args(["seed", "--seed", "340282366920938463463374607431768211463"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_seed_explicit_beats_override() {
    let mut t = Test::with_vars(RUN);
    t.set_var("ROTATION_SEED", "99");

    let output = t.seed(&["--seed", "12345"]);
    assert_eq!(stdout(&output), "12345\n");
}

#[test]
fn test_seed_override() {
    let mut t = Test::with_vars(RUN);
    t.set_var("ROTATION_SEED", "99");

    assert_eq!(seed_for(&t), 99);
}

#[test]
fn test_seed_is_deterministic() {
    assert_eq!(seed_for(&Test::with_vars(RUN)), seed_for(&Test::with_vars(RUN)));
}

#[test]
fn test_seed_changes_with_attempt() {
    let base = seed_for(&Test::with_vars(RUN));

    let mut t = Test::with_vars(RUN);
    t.set_var("GITHUB_RUN_ATTEMPT", "2");
    assert_ne!(seed_for(&t), base);
}

#[test]
fn test_seed_changes_with_workflow() {
    let base = seed_for(&Test::with_vars(RUN));

    let mut t = Test::with_vars(RUN);
    t.set_var("GITHUB_WORKFLOW", "Nightly");
    assert_ne!(seed_for(&t), base);
}

#[test]
fn test_seed_changes_with_run_id() {
    let base = seed_for(&Test::with_vars(RUN));

    let mut t = Test::with_vars(RUN);
    t.set_var("GITHUB_RUN_ID", "8812345679");
    assert_ne!(seed_for(&t), base);
}

#[test]
fn test_seed_json_context_source() {
    let t = Test::with_vars(RUN);

    let output = t.seed(&["--json"]);
    assert_success(&output);

    let v: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(v["source"]["kind"], "context");
    assert_eq!(v["source"]["signals"], 6);
    let jitter = v["source"]["jitter"].as_u64().unwrap();
    assert!(jitter <= 1_000_000);
    let base = v["source"]["base"].as_u64().unwrap();
    assert_eq!(v["seed"].as_u64().unwrap(), base.wrapping_add(jitter));
}
