//! Object identification.
//!
//! Every permanent on a battlefield carries an `ObjectId` taken verbatim
//! from the game document. Identities are unique across all boards; the
//! loader rejects documents that reuse one.
//!
//! ## Usage
//!
//! ```
//! use ccg_stack::core::ObjectId;
//!
//! let bear = ObjectId::new("p3");
//! assert_eq!(bear.as_str(), "p3");
//! assert_eq!(format!("{}", bear), "p3");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a battlefield object (a permanent).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    /// Create an object ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
