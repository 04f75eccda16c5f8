// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document indexing by discriminator attribute.

use crate::error::CompareError;
use std::collections::BTreeMap;

/// Attribute name to string value, in attribute-name order.
pub type AttributeMap = BTreeMap<String, String>;

/// Root children of a document, keyed by their `class` attribute.
///
/// Iteration is in ascending discriminator order so diagnostics are
/// deterministic. Duplicate discriminators within one document are
/// last-write-wins; children without a `class` attribute are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementIndex {
    elements: BTreeMap<String, AttributeMap>,
}

/// The discriminator attribute used to match elements between documents.
pub const DISCRIMINATOR_ATTR: &str = "class";

impl ElementIndex {
    /// Parse an XML document and index its root children by `class`.
    ///
    /// An empty or malformed document is a structural error.
    pub fn parse(source: &str) -> Result<Self, CompareError> {
        let doc = roxmltree::Document::parse(source)?;
        let mut elements = BTreeMap::new();

        for child in doc.root_element().children().filter(|n| n.is_element()) {
            let Some(class) = child.attribute(DISCRIMINATOR_ATTR) else {
                continue;
            };
            let attrs: AttributeMap = child
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect();
            elements.insert(class.to_string(), attrs);
        }

        Ok(Self { elements })
    }

    /// Look up an element's attributes by discriminator.
    pub fn get(&self, discriminator: &str) -> Option<&AttributeMap> {
        self.elements.get(discriminator)
    }

    /// Iterate (discriminator, attributes) in ascending discriminator order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a AttributeMap)> + 'a {
        self.elements.iter().map(|(d, a)| (d.as_str(), a))
    }

    /// Number of indexed elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the index holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
