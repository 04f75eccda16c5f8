// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External toolchain invocation that regenerates candidate files.

use crate::config::ProducerConfig;
use std::path::Path;
use thiserror::Error;
use tokio::process::Command;

/// Errors raised while running the producer toolchain
#[derive(Debug, Error)]
pub enum ProducerError {
    #[error("failed to create candidate directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("producer stage is empty")]
    EmptyStage,

    #[error("failed to spawn producer stage `{stage}`: {source}")]
    Spawn {
        stage: String,
        #[source]
        source: std::io::Error,
    },

    #[error("producer stage `{stage}` failed: {status}")]
    StageFailed {
        stage: String,
        status: std::process::ExitStatus,
    },
}

/// Runs the configured toolchain stages in sequence.
///
/// Stage stdout/stderr are inherited rather than captured; the candidate
/// files appear as a side effect of the stages' own I/O.
pub struct Producer {
    config: ProducerConfig,
}

impl Producer {
    pub fn new(config: ProducerConfig) -> Self {
        Self { config }
    }

    /// Ensure the candidate directory exists, then run each stage to
    /// completion. A stage that fails to spawn or exits non-zero aborts
    /// the run; later stages do not start.
    pub async fn produce(&self, candidate_dir: &Path) -> Result<(), ProducerError> {
        std::fs::create_dir_all(candidate_dir).map_err(|source| ProducerError::CreateDir {
            path: candidate_dir.display().to_string(),
            source,
        })?;

        for stage in &self.config.stages {
            self.run_stage(stage).await?;
        }

        Ok(())
    }

    async fn run_stage(&self, stage: &[String]) -> Result<(), ProducerError> {
        let (program, args) = stage.split_first().ok_or(ProducerError::EmptyStage)?;
        let label = stage.join(" ");

        let mut command = Command::new(program);
        command.args(args);
        if let Some(workdir) = &self.config.workdir {
            command.current_dir(workdir);
        }

        let status = command.status().await.map_err(|source| ProducerError::Spawn {
            stage: label.clone(),
            source,
        })?;

        if !status.success() {
            return Err(ProducerError::StageFailed {
                stage: label,
                status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "producer_tests.rs"]
mod tests;
