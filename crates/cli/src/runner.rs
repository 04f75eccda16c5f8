// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration: produce, compare, clean up, aggregate.

use crate::compare::{compare_indexes, CompareError, ElementIndex, Mismatch};
use crate::config::HarnessConfig;
use crate::output;
use crate::pairing::{pair_files, FilePair};
use crate::producer::{Producer, ProducerError};
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Exit codes for the harness binary
pub mod exit_codes {
    /// Structurally clean run with zero mismatches
    pub const SUCCESS: i32 = 0;
    /// At least one attribute mismatch was recorded
    pub const MISMATCH: i32 = 1;
    /// Producer failure, unreadable or unparseable file, or missing discriminator
    pub const STRUCTURAL: i32 = 2;
}

/// Structural errors that abort a run.
///
/// Mismatches are not errors; they travel in [`RunReport`].
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Producer(#[from] ProducerError),

    #[error("failed to list gold directory {path}: {source}")]
    ListGold {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Compare {
        path: String,
        #[source]
        source: CompareError,
    },

    #[error("failed to bless {path}: {source}")]
    Bless {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove candidate directory {path}: {source}")]
    Cleanup {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(std::io::Error),
}

/// Comparison results for one gold/candidate pair
#[derive(Clone, Debug, Serialize)]
pub struct FileReport {
    pub name: String,
    pub mismatches: Vec<Mismatch>,
}

/// Accumulated results for a whole run
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// Total mismatches across all files
    pub fn mismatch_count(&self) -> usize {
        self.files.iter().map(|f| f.mismatches.len()).sum()
    }

    /// Whether any mismatch was recorded
    pub fn failed(&self) -> bool {
        self.files.iter().any(|f| !f.mismatches.is_empty())
    }
}

/// Behavior switches carried from the CLI
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub skip_producer: bool,
    pub keep_candidates: bool,
    pub bless: bool,
    pub only: Option<glob::Pattern>,
    /// Emit per-mismatch text lines as they are found (text format only)
    pub print_mismatches: bool,
    pub verbose: bool,
}

/// The run controller.
///
/// Strict order: produce, compare all pairs, clean up, report. Cleanup
/// runs only when the comparison loop completes normally; a structural
/// error returns early and leaves the candidate directory behind for
/// inspection.
pub struct Runner {
    config: HarnessConfig,
    options: RunOptions,
}

impl Runner {
    pub fn new(config: HarnessConfig, options: RunOptions) -> Self {
        Self { config, options }
    }

    /// Execute a full run, writing text-mode diagnostics to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunReport, RunError> {
        if !self.options.skip_producer {
            Producer::new(self.config.producer.clone())
                .produce(&self.config.candidate_dir)
                .await?;
        }

        if self.options.bless {
            let blessed = self.bless()?;
            if self.options.print_mismatches {
                writeln!(out, "blessed {} gold file(s)", blessed).map_err(RunError::Output)?;
            }
            self.cleanup()?;
            return Ok(RunReport::default());
        }

        let pairs = pair_files(
            &self.config.gold_dir,
            &self.config.candidate_dir,
            self.options.only.as_ref(),
        )
        .map_err(|source| RunError::ListGold {
            path: self.config.gold_dir.display().to_string(),
            source,
        })?;

        let mut report = RunReport::default();
        for pair in pairs {
            let mismatches = self.compare_pair(&pair)?;
            if self.options.print_mismatches {
                for mismatch in &mismatches {
                    output::write_mismatch(out, mismatch, self.options.verbose)
                        .map_err(RunError::Output)?;
                }
            }
            report.files.push(FileReport {
                name: pair.name,
                mismatches,
            });
        }

        self.cleanup()?;

        Ok(report)
    }

    fn compare_pair(&self, pair: &FilePair) -> Result<Vec<Mismatch>, RunError> {
        let gold = read_file(&pair.gold)?;
        let candidate = read_file(&pair.candidate)?;

        let gold_index = ElementIndex::parse(&gold).map_err(|source| RunError::Compare {
            path: pair.gold.display().to_string(),
            source,
        })?;
        let candidate_index =
            ElementIndex::parse(&candidate).map_err(|source| RunError::Compare {
                path: pair.candidate.display().to_string(),
                source,
            })?;

        compare_indexes(&gold_index, &candidate_index).map_err(|source| RunError::Compare {
            path: pair.candidate.display().to_string(),
            source,
        })
    }

    /// Copy every regular candidate file over its gold counterpart.
    fn bless(&self) -> Result<usize, RunError> {
        std::fs::create_dir_all(&self.config.gold_dir)
            .map_err(|e| bless_error(&self.config.gold_dir, e))?;

        let mut copied = 0;
        let entries = std::fs::read_dir(&self.config.candidate_dir)
            .map_err(|e| bless_error(&self.config.candidate_dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| bless_error(&self.config.candidate_dir, e))?;
            let path = entry.path();
            if !entry.file_type().map_err(|e| bless_error(&path, e))?.is_file() {
                continue;
            }
            let target = self.config.gold_dir.join(entry.file_name());
            std::fs::copy(&path, &target).map_err(|e| bless_error(&path, e))?;
            copied += 1;
        }

        Ok(copied)
    }

    fn cleanup(&self) -> Result<(), RunError> {
        if self.options.keep_candidates {
            return Ok(());
        }
        match std::fs::remove_dir_all(&self.config.candidate_dir) {
            Ok(()) => Ok(()),
            // Already absent counts as cleaned (possible with --skip-producer)
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(RunError::Cleanup {
                path: self.config.candidate_dir.display().to_string(),
                source,
            }),
        }
    }
}

fn read_file(path: &std::path::Path) -> Result<String, RunError> {
    std::fs::read_to_string(path).map_err(|source| RunError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn bless_error(path: &std::path::Path, source: std::io::Error) -> RunError {
    RunError::Bless {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
