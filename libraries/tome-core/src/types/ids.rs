//! ID types for Tome Player entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Book identifier
///
/// Opaque key naming a book within the library. The inner representation
/// is a string so that ids minted by different scanners (content hashes,
/// uuids, legacy numeric ids) can coexist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Create a new book ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random book ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
