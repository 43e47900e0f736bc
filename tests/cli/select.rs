//! Tests for `keyrotor select`.

use crate::support::*;
use predicates::prelude::*;

fn pool() -> Test {
    Test::with_vars(&[("PREFIX", "primary"), ("PREFIX_2", "secondary")])
}

#[test]
fn test_select_writes_channel_files() {
    let t = pool();

    let output = t.select(&["--prefix", "PREFIX", "--seed", "1"]);
    assert_success(&output);

    assert_eq!(t.read_env_file(), "PREFIX=secondary\n");
    assert_eq!(
        t.read_output_file(),
        "selected_key_name=PREFIX_2\nkey_present=true\n"
    );
    assert_eq!(stdout(&output), "::add-mask::secondary\n");
    assert_stderr_contains(&output, "PREFIX_2");
    assert_not_leaked(&output, "secondary");
}

#[test]
fn test_select_seed_zero_picks_first() {
    let t = pool();

    let output = t.select(&["--prefix", "PREFIX", "--seed", "0"]);
    assert_success(&output);
    assert_eq!(t.read_env_file(), "PREFIX=primary\n");
}

#[test]
fn test_select_falls_back_to_stdout() {
    let t = pool();

    let output = t
        .bare_cmd()
        .args(["select", "--prefix", "PREFIX", "--seed", "1"])
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(
        stdout(&output),
        "::add-mask::secondary\nPREFIX=secondary\nselected_key_name=PREFIX_2\nkey_present=true\n"
    );
    assert!(!t.env_file().exists());
    assert!(!t.output_file().exists());
}

#[test]
fn test_select_appends_to_existing_files() {
    let t = pool();
    std::fs::write(t.output_file(), "earlier=1\n").unwrap();

    assert_success(&t.select(&["--prefix", "PREFIX", "--seed", "1"]));

    assert_eq!(
        t.read_output_file(),
        "earlier=1\nselected_key_name=PREFIX_2\nkey_present=true\n"
    );
}

#[test]
fn test_select_custom_export_and_output_names() {
    let t = pool();

    let output = t.select(&[
        "--prefix",
        "PREFIX",
        "--seed",
        "3",
        "--export-as",
        "LLM_KEY",
        "--output-name",
        "picked",
    ]);
    assert_success(&output);

    assert_eq!(t.read_env_file(), "LLM_KEY=secondary\n");
    assert_eq!(t.read_output_file(), "picked=PREFIX_2\nkey_present=true\n");
}

#[test]
fn test_select_uses_provider_prefix() {
    let t = Test::with_vars(&[("OPENAI_API_KEY", "sk-a"), ("OPENAI_API_KEY_2", "sk-b")]);

    let output = t.select(&["--provider", "openai", "--seed", "2"]);
    assert_success(&output);

    assert_eq!(t.read_env_file(), "OPENAI_API_KEY=sk-a\n");
    assert_eq!(
        t.read_output_file(),
        "selected_key_name=OPENAI_API_KEY\nkey_present=true\n"
    );
}

#[test]
fn test_select_empty_pool_fails() {
    let t = Test::with_vars(&[("UNRELATED", "x")]);

    t.cmd()
        .args(["select", "--prefix", "PREFIX"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("PREFIX"))
        .stderr(predicate::str::contains("--allow-missing"));

    assert_eq!(t.read_env_file(), "");
    assert_eq!(t.read_output_file(), "");
}

#[test]
fn test_select_empty_values_do_not_count() {
    let t = Test::with_vars(&[("PREFIX", ""), ("PREFIX_2", "")]);

    let output = t.select(&["--prefix", "PREFIX"]);
    assert_failure(&output);
}

#[test]
fn test_select_allow_missing() {
    let t = Test::new();

    let output = t.select(&["--prefix", "PREFIX", "--allow-missing"]);
    assert_success(&output);

    assert_eq!(t.read_env_file(), "");
    assert_eq!(t.read_output_file(), "key_present=false\n");
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_select_allow_missing_from_env() {
    let mut t = Test::new();
    t.set_var("KEYROTOR_ALLOW_MISSING", "true");

    let output = t.select(&["--prefix", "PREFIX"]);
    assert_success(&output);
    assert_eq!(t.read_output_file(), "key_present=false\n");
}

#[test]
fn test_select_is_reproducible_for_same_run() {
    let vars = [
        ("KEY", "a"),
        ("KEY_2", "b"),
        ("KEY_3", "c"),
        ("KEY_4", "d"),
        ("GITHUB_RUN_ID", "8812345678"),
        ("GITHUB_RUN_NUMBER", "41"),
        ("GITHUB_SHA", "9fceb02d0ae598e95dc970b74767f19372d61af8"),
        ("GITHUB_RUN_ATTEMPT", "1"),
        ("GITHUB_WORKFLOW", "CI"),
        ("GITHUB_JOB", "test"),
    ];

    let first = Test::with_vars(&vars);
    let second = Test::with_vars(&vars);
    assert_success(&first.select(&["--prefix", "KEY"]));
    assert_success(&second.select(&["--prefix", "KEY"]));

    assert_eq!(first.read_output_file(), second.read_output_file());
    assert_eq!(first.read_env_file(), second.read_env_file());
}

#[test]
fn test_select_rotation_seed_override() {
    let t = Test::with_vars(&[
        ("KEY", "a"),
        ("KEY_2", "b"),
        ("KEY_3", "c"),
        ("ROTATION_SEED", "5"),
        ("GITHUB_RUN_ID", "1"),
    ]);

    assert_success(&t.select(&["--prefix", "KEY"]));
    // 5 % 3 == 2
    assert_eq!(t.read_env_file(), "KEY=c\n");
}

#[test]
fn test_select_multiline_value() {
    let t = Test::with_vars(&[("CERT", "line-one\nline-two")]);

    let output = t.select(&["--prefix", "CERT"]);
    assert_success(&output);

    assert_eq!(
        t.read_env_file(),
        "CERT<<KEYROTOR_EOF\nline-one\nline-two\nKEYROTOR_EOF\n"
    );
    assert_eq!(
        stdout(&output),
        "::add-mask::line-one\n::add-mask::line-two\n"
    );
}

#[test]
fn test_select_dry_run_writes_nothing() {
    let t = pool();

    let output = t.select(&["--prefix", "PREFIX", "--seed", "1", "--dry-run"]);
    assert_success(&output);

    assert_eq!(stdout(&output), "PREFIX_2\n");
    assert!(!t.env_file().exists());
    assert!(!t.output_file().exists());
    assert_not_leaked(&output, "secondary");
}

#[test]
fn test_select_config_defaults() {
    let t = Test::with_vars(&[("TEAM_TOKEN_1", "t1"), ("TEAM_TOKEN_2", "t2")]);
    t.write_config(
        r#"
[defaults]
provider = "team"
output_name = "token_source"

[providers.team]
prefix = "TEAM_TOKEN"
export_as = "TOKEN"
"#,
    );

    let output = t.select(&["--seed", "1"]);
    assert_success(&output);

    assert_eq!(t.read_env_file(), "TOKEN=t2\n");
    assert_eq!(
        t.read_output_file(),
        "token_source=TEAM_TOKEN_2\nkey_present=true\n"
    );
}

#[test]
fn test_select_config_custom_missing_message() {
    let t = Test::new();
    t.write_config(
        r#"
[providers.team]
prefix = "TEAM_TOKEN"
missing_message = "ask #platform to provision {prefix}"
"#,
    );

    let output = t.select(&["--provider", "team"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "ask #platform to provision TEAM_TOKEN");
}

#[test]
fn test_select_unwritable_channel_fails() {
    let t = pool();

    let output = t
        .bare_cmd()
        .env("GITHUB_ENV", t.dir.path())
        .args(["select", "--prefix", "PREFIX", "--seed", "1"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "GITHUB_ENV");
}

#[test]
fn test_select_negative_seed_wraps() {
    let t = pool();

    // -1 wraps to u64::MAX, which is odd, so the second candidate wins
    t.cmd()
        .args(["select", "--prefix", "PREFIX", "--seed", "-1"])
        .assert()
        .success();

    assert!(t.read_output_file().contains("selected_key_name=PREFIX_2"));
}
