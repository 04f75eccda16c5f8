// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural comparison errors.

use thiserror::Error;

/// Errors raised while indexing or comparing documents.
///
/// All variants are structural: they abort a comparison run, unlike
/// [`Mismatch`](crate::Mismatch) records which are accumulated and
/// reported.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("failed to parse document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("candidate has no element with class \"{discriminator}\"")]
    MissingDiscriminator { discriminator: String },
}
