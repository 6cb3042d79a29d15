//! Derived cart totals.

use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Totals derived from the cart against current product data.
///
/// Always recomputed from scratch; never stored alongside the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CartSummary {
    /// Sum of unit price times quantity over resolvable entries.
    pub total: Price,
    /// Sum of quantities over resolvable entries.
    pub item_count: i64,
}

impl CartSummary {
    /// The summary of an empty cart.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the summary counts no items.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Pluralized count label for the cart pill (e.g., "3 items").
    pub fn items_label(&self) -> String {
        if self.item_count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", self.item_count)
        }
    }
}
