//! Wire DTOs for the grocery REST collaborator.
//!
//! DESIGN
//! ======
//! Field names match the JSON the backend stores verbatim, so the same
//! struct serves as list entry, create body, and local state row.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single grocery-list entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (epoch milliseconds as a decimal string).
    pub id: String,
    /// Text label shown in the list.
    pub item: String,
    /// Whether the entry has been checked off.
    #[serde(default)]
    pub checked: bool,
}

impl Item {
    /// Build a fresh, unchecked item.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), item: label.into(), checked: false }
    }
}

/// Body of `PATCH /items/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedPatch {
    pub checked: bool,
}
