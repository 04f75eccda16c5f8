// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Attribute-by-attribute comparison of indexed documents.

use crate::error::CompareError;
use crate::index::ElementIndex;
use serde::{Deserialize, Serialize};

/// A single attribute divergence between a gold and a candidate element.
///
/// Mismatches are non-fatal: a comparison pass records them and continues.
/// `actual` is `None` when the candidate element lacks the attribute
/// entirely, which is distinct from carrying an empty value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub discriminator: String,
    pub attribute: String,
    pub expected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failure at {}: {}", self.discriminator, self.attribute)
    }
}

/// Compare a candidate index against a gold index.
///
/// Every attribute present on a gold element (the `class` attribute
/// included) must compare exactly equal on the candidate element with the
/// same discriminator. Attributes present only on the candidate, and
/// candidate elements whose discriminator the gold document lacks, are
/// ignored.
///
/// Returns the recorded mismatches in (discriminator, attribute) order. A
/// discriminator missing from the candidate is a structural error and
/// aborts the comparison.
pub fn compare_indexes(
    gold: &ElementIndex,
    candidate: &ElementIndex,
) -> Result<Vec<Mismatch>, CompareError> {
    let mut mismatches = Vec::new();

    for (discriminator, gold_attrs) in gold.iter() {
        let candidate_attrs =
            candidate
                .get(discriminator)
                .ok_or_else(|| CompareError::MissingDiscriminator {
                    discriminator: discriminator.to_string(),
                })?;

        for (attribute, expected) in gold_attrs {
            let actual = candidate_attrs.get(attribute);
            if actual != Some(expected) {
                mismatches.push(Mismatch {
                    discriminator: discriminator.to_string(),
                    attribute: attribute.clone(),
                    expected: expected.clone(),
                    actual: actual.cloned(),
                });
            }
        }
    }

    Ok(mismatches)
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
