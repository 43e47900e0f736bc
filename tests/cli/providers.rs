//! Tests for `keyrotor providers`.

use crate::support::*;

#[test]
fn test_providers_lists_builtins() {
    let t = Test::new();

    let output = t.cmd().arg("providers").output().unwrap();
    assert_success(&output);

    for prefix in ["API_KEY", "OPENAI_API_KEY", "ANTHROPIC_API_KEY", "GEMINI_API_KEY"] {
        assert_stdout_contains(&output, prefix);
    }
}

#[test]
fn test_providers_include_config() {
    let t = Test::new();
    t.write_config("[providers.team]\nprefix = \"TEAM_TOKEN\"\n");

    let output = t.cmd().args(["providers", "--json"]).output().unwrap();
    assert_success(&output);

    let list: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let team = list
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "team")
        .expect("team provider listed");
    assert_eq!(team["prefix"], "TEAM_TOKEN");
}

#[test]
fn test_providers_explicit_config_flag() {
    let t = Test::new();
    let path = t.dir.path().join("custom.toml");
    std::fs::write(&path, "[providers.alt]\nprefix = \"ALT_KEY\"\n").unwrap();

    let output = t
        .cmd()
        .args(["--config", path.to_str().unwrap(), "providers"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "ALT_KEY");
}
