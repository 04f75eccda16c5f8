// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gold/candidate file pairing.

use std::io;
use std::path::{Path, PathBuf};

/// A gold file and its candidate counterpart under the candidate directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePair {
    pub name: String,
    pub gold: PathBuf,
    pub candidate: PathBuf,
}

/// List the gold directory and derive candidate paths by leaf name.
///
/// Only regular files in the gold directory are paired; subdirectories are
/// skipped. Candidate existence is not checked here; a missing candidate
/// surfaces as a read error during comparison. Pairs come back sorted by
/// file name so diagnostics are deterministic.
pub fn pair_files(
    gold_dir: &Path,
    candidate_dir: &Path,
    only: Option<&glob::Pattern>,
) -> io::Result<Vec<FilePair>> {
    let mut pairs = Vec::new();

    for entry in std::fs::read_dir(gold_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        // Non-UTF-8 names cannot be matched or reported; skip them.
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };

        if let Some(pattern) = only {
            if !pattern.matches(&name) {
                continue;
            }
        }

        pairs.push(FilePair {
            gold: entry.path(),
            candidate: candidate_dir.join(&name),
            name,
        });
    }

    pairs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(pairs)
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod tests;
