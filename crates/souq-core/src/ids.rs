//! Newtype ID for type-safe product references.
//!
//! The catalog data files carry plain numeric ids. Wrapping them keeps a
//! product id from being mixed up with a quantity or a list position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier, stable within a dataset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create an ID from its raw numeric value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
