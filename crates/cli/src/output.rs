// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering and diagnostic output helpers.

use crate::compare::Mismatch;
use crate::runner::RunReport;
use similar::{ChangeTag, TextDiff};
use std::io::{self, IsTerminal, Write};

/// Write the per-mismatch diagnostic line, plus expected/actual detail in
/// verbose mode.
pub fn write_mismatch<W: Write>(
    writer: &mut W,
    mismatch: &Mismatch,
    verbose: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", mismatch)?;
    if verbose {
        writeln!(writer, "  expected: {}", mismatch.expected)?;
        match &mismatch.actual {
            Some(actual) => {
                writeln!(writer, "  actual:   {}", actual)?;
                writeln!(
                    writer,
                    "  diff:     {}",
                    inline_diff(&mismatch.expected, actual)
                )?;
            }
            None => writeln!(writer, "  actual:   (attribute missing)")?,
        }
    }
    Ok(())
}

/// Render a compact word-level diff of two attribute values.
fn inline_diff(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_words(expected, actual);
    let mut rendered = String::new();
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => {
                rendered.push_str("[-");
                rendered.push_str(change.value());
                rendered.push_str("-]");
            }
            ChangeTag::Insert => {
                rendered.push_str("[+");
                rendered.push_str(change.value());
                rendered.push_str("+]");
            }
            ChangeTag::Equal => rendered.push_str(change.value()),
        }
    }
    rendered
}

/// Write the end-of-run summary line (verbose text mode only).
pub fn write_summary<W: Write>(writer: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(
        writer,
        "{} file(s) compared, {} mismatch(es)",
        report.files.len(),
        report.mismatch_count()
    )
}

/// Serialize the run report as a single JSON document.
pub fn write_json_report<W: Write>(writer: &mut W, report: &RunReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)
}

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
