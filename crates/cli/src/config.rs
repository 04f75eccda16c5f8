// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration types for TOML config files.

use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default gold (reference) directory.
pub const DEFAULT_GOLD_DIR: &str = "../goldfiles/";
/// Default candidate (regenerated) directory.
pub const DEFAULT_CANDIDATE_DIR: &str = "../tmp/";

fn default_gold_dir() -> PathBuf {
    PathBuf::from(DEFAULT_GOLD_DIR)
}

fn default_candidate_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CANDIDATE_DIR)
}

fn default_stages() -> Vec<Vec<String>> {
    vec![
        vec![
            "npx".to_string(),
            "tsc".to_string(),
            "generate-comparefiles.ts".to_string(),
        ],
        vec!["node".to_string(), "generate-comparefiles.js".to_string()],
    ]
}

/// Errors that can occur when loading a harness config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level harness configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Directory holding the gold files (default: "../goldfiles/")
    #[serde(default = "default_gold_dir")]
    pub gold_dir: PathBuf,

    /// Directory the producer regenerates candidates into (default: "../tmp/")
    #[serde(default = "default_candidate_dir")]
    pub candidate_dir: PathBuf,

    /// External toolchain configuration
    #[serde(default)]
    pub producer: ProducerConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            gold_dir: default_gold_dir(),
            candidate_dir: default_candidate_dir(),
            producer: ProducerConfig::default(),
        }
    }
}

/// External toolchain configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProducerConfig {
    /// Toolchain stages run in sequence, each an argv array.
    /// Default: a compile stage followed by an execution stage.
    #[serde(default = "default_stages")]
    pub stages: Vec<Vec<String>>,

    /// Working directory for the stages (default: current directory)
    #[serde(default)]
    pub workdir: Option<PathBuf>,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            stages: default_stages(),
            workdir: None,
        }
    }
}

impl HarnessConfig {
    /// Load a harness config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply CLI flag overrides on top of file or default values
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.gold_dir {
            self.gold_dir = dir.clone();
        }
        if let Some(dir) = &cli.candidate_dir {
            self.candidate_dir = dir.clone();
        }
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
