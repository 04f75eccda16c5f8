// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::Parser;

#[test]
fn test_defaults_reproduce_original_toolchain() {
    let config = HarnessConfig::default();

    assert_eq!(config.gold_dir, PathBuf::from("../goldfiles/"));
    assert_eq!(config.candidate_dir, PathBuf::from("../tmp/"));
    assert_eq!(
        config.producer.stages,
        vec![
            vec!["npx".to_string(), "tsc".to_string(), "generate-comparefiles.ts".to_string()],
            vec!["node".to_string(), "generate-comparefiles.js".to_string()],
        ]
    );
    assert!(config.producer.workdir.is_none());
}

#[test]
fn test_parse_full_config() {
    let toml_str = r#"
gold_dir = "fixtures/gold"
candidate_dir = "fixtures/tmp"

[producer]
stages = [["make", "renders"]]
workdir = "fixtures"
"#;
    let config: HarnessConfig = toml::from_str(toml_str).unwrap();

    assert_eq!(config.gold_dir, PathBuf::from("fixtures/gold"));
    assert_eq!(config.candidate_dir, PathBuf::from("fixtures/tmp"));
    assert_eq!(
        config.producer.stages,
        vec![vec!["make".to_string(), "renders".to_string()]]
    );
    assert_eq!(config.producer.workdir, Some(PathBuf::from("fixtures")));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: HarnessConfig = toml::from_str(r#"gold_dir = "gold""#).unwrap();

    assert_eq!(config.gold_dir, PathBuf::from("gold"));
    assert_eq!(config.candidate_dir, PathBuf::from("../tmp/"));
    assert_eq!(config.producer.stages.len(), 2);
}

#[test]
fn test_unknown_fields_are_rejected() {
    let result: Result<HarnessConfig, _> = toml::from_str(r#"tolerance = 0.1"#);
    assert!(result.is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    use std::io::Write;
    write!(file, "candidate_dir = \"out\"").unwrap();

    let config = HarnessConfig::load(file.path()).unwrap();
    assert_eq!(config.candidate_dir, PathBuf::from("out"));
}

#[test]
fn test_load_missing_file_is_an_io_error() {
    let result = HarnessConfig::load(Path::new("/nonexistent/goldrun.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_cli_flags_override_config() {
    let config: HarnessConfig = toml::from_str(r#"gold_dir = "from-config""#).unwrap();
    let cli = Cli::try_parse_from(["goldrun", "--gold-dir", "from-cli"]).unwrap();

    let merged = config.apply_cli(&cli);
    assert_eq!(merged.gold_dir, PathBuf::from("from-cli"));
    // Unset flags leave config values alone
    assert_eq!(merged.candidate_dir, PathBuf::from("../tmp/"));
}
