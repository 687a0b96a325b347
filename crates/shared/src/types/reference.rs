//! Opaque reference-data pairs.

use serde::{Deserialize, Serialize};

/// An `{id, name}` pair as returned by the dropdown/reference service.
///
/// The core never interprets reference data beyond its display name; the
/// typed ID keeps the pair attached to the right dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named<Id> {
    /// Opaque identifier.
    pub id: Id,
    /// Display name.
    pub name: String,
}

impl<Id> Named<Id> {
    /// Creates a new reference pair.
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
