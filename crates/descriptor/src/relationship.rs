//! Relationships: the named outcomes an extension can route data to.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named outcome category produced by an extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    /// Relationship name, unique within its descriptor.
    pub name: String,
    /// Human readable description.
    #[serde(default)]
    pub description: String,
}

impl Relationship {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Returns the relationships ordered lexicographically by name.
///
/// Ties (which only occur for malformed descriptors with duplicate names) are
/// broken by description so the result is still deterministic.
pub fn sorted_relationships(relationships: &HashSet<Relationship>) -> Vec<&Relationship> {
    let mut sorted: Vec<&Relationship> = relationships.iter().collect();
    sorted.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.description.cmp(&b.description))
    });
    sorted
}
