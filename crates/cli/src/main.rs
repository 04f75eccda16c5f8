// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! goldrun binary entry point.

use clap::Parser;

use goldrun::cli::{Cli, OutputFormat};
use goldrun::config::HarnessConfig;
use goldrun::output::{self, print_error};
use goldrun::runner::{exit_codes, RunOptions, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match HarnessConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                print_error(e);
                std::process::exit(exit_codes::STRUCTURAL);
            }
        },
        None => HarnessConfig::default(),
    }
    .apply_cli(&cli);

    let only = match cli.only.as_deref().map(glob::Pattern::new).transpose() {
        Ok(pattern) => pattern,
        Err(e) => {
            print_error(format_args!("invalid --only pattern: {}", e));
            std::process::exit(exit_codes::STRUCTURAL);
        }
    };

    let options = RunOptions {
        skip_producer: cli.skip_producer,
        keep_candidates: cli.keep_candidates,
        bless: cli.bless,
        only,
        print_mismatches: cli.output_format == OutputFormat::Text,
        verbose: cli.verbose,
    };

    let runner = Runner::new(config, options);
    let mut stdout = std::io::stdout();

    let report = match runner.run(&mut stdout).await {
        Ok(report) => report,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::STRUCTURAL);
        }
    };

    if cli.output_format == OutputFormat::Json {
        if let Err(e) = output::write_json_report(&mut stdout, &report) {
            print_error(e);
            std::process::exit(exit_codes::STRUCTURAL);
        }
    } else if cli.verbose {
        let _ = output::write_summary(&mut stdout, &report);
    }

    if report.failed() {
        print_error("test failed");
        std::process::exit(exit_codes::MISMATCH);
    }
}
