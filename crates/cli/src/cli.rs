// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the harness binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Gold file comparison harness
#[derive(Parser, Clone, Debug)]
#[command(
    name = "goldrun",
    version,
    about = "Regenerate candidate files and compare them against gold files"
)]
pub struct Cli {
    /// Harness configuration file (TOML)
    #[arg(long, env = "GOLDRUN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the gold (reference) files
    #[arg(long, value_name = "DIR")]
    pub gold_dir: Option<PathBuf>,

    /// Directory the producer regenerates candidate files into
    #[arg(long, value_name = "DIR")]
    pub candidate_dir: Option<PathBuf>,

    /// Only compare gold files whose name matches this glob
    #[arg(long, value_name = "GLOB")]
    pub only: Option<String>,

    /// Skip the producer stages and compare existing candidate files
    #[arg(long)]
    pub skip_producer: bool,

    /// Leave the candidate directory in place after the run
    #[arg(long)]
    pub keep_candidates: bool,

    /// Rewrite the gold files from freshly produced candidates
    #[arg(long)]
    pub bless: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Print expected/actual detail for each mismatch and a run summary
    #[arg(long)]
    pub verbose: bool,
}

/// Report format written to stdout
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Per-mismatch diagnostic lines
    Text,
    /// A single JSON report document after the run
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
