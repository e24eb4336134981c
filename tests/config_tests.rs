//! Configuration file loading tests

use gh_sweep::Config;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, yaml: &str) -> String {
    let path = dir.path().join("gh-sweep.yaml");
    fs::write(&path, yaml).expect("Failed to write config");
    path.to_str().expect("Config path not UTF-8").to_string()
}

#[test]
fn test_load_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "github:\n  api_base: https://ghe.example.com/api/v3\n  per_page: 50\n",
    );

    let config = Config::load_with(|key| (key == "GH_SWEEP_CONFIG").then(|| path.clone())).unwrap();

    assert_eq!(config.github.api_base, "https://ghe.example.com/api/v3");
    assert_eq!(config.github.per_page, 50);
    assert_eq!(config.github.gh_binary, "gh");
}

#[test]
fn test_environment_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "github:\n  api_base: https://from-file.example.com\n");

    let config = Config::load_with(|key| match key {
        "GH_SWEEP_CONFIG" => Some(path.clone()),
        "GITHUB_API_URL" => Some("https://from-env.example.com".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.github.api_base, "https://from-env.example.com");
}

#[test]
fn test_invalid_values_in_file_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "github:\n  per_page: 0\n  gh_binary: \"\"\n");

    let err = Config::load_with(|key| (key == "GH_SWEEP_CONFIG").then(|| path.clone()))
        .unwrap_err();
    let message = err.to_string();

    assert!(message.contains("per_page must be between 1 and 100"));
    assert!(message.contains("gh binary cannot be empty"));
}

#[test]
fn test_prompt_overrides_in_file_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "prompt:\n  confirmation_length: 1\n");

    let err = Config::load_with(|key| (key == "GH_SWEEP_CONFIG").then(|| path.clone()))
        .unwrap_err();
    assert!(format!("{:#}", err).contains("unknown field `prompt`"));
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "github: [not, a, map]\n");

    let err = Config::from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid config file"));
}
