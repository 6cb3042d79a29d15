//! Product records and stock status.

use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Stock status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Freely purchasable.
    InStock,
    /// Purchasable, running low.
    LowStock,
    /// Not purchasable. Also the fallback for values the data files use
    /// that this build does not know about.
    #[default]
    #[serde(other)]
    NotAvailable,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::NotAvailable => "not_available",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in_stock" => Some(StockStatus::InStock),
            "low_stock" => Some(StockStatus::LowStock),
            "not_available" => Some(StockStatus::NotAvailable),
            _ => None,
        }
    }

    /// Get the stock status message shown on the product card.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::NotAvailable => "Not Available",
        }
    }

    /// Get the status CSS class for the availability badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in",
            StockStatus::LowStock => "low",
            StockStatus::NotAvailable => "out",
        }
    }

    /// Whether add-to-cart is offered for this status.
    pub fn is_purchasable(&self) -> bool {
        !matches!(self, StockStatus::NotAvailable)
    }
}

/// A product in the catalog.
///
/// Records come straight from the dataset JSON. Every field except `id`
/// falls back to its default when missing, so one sparse record degrades
/// on its own instead of failing the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Short description for the product card.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    #[serde(default)]
    pub price: Price,
    /// Image reference, opaque to the core.
    #[serde(default)]
    pub image: String,
    /// Stock status.
    #[serde(default)]
    pub stock: StockStatus,
    /// Optional promotional badge (e.g., "New", "Sale").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    /// Case-insensitive substring match against name or description.
    ///
    /// The needle must already be trimmed and lowercased; callers do that
    /// once per query rather than once per product.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Whether add-to-cart is offered for this product.
    pub fn is_purchasable(&self) -> bool {
        self.stock.is_purchasable()
    }

    /// Line total for a given quantity.
    pub fn line_total(&self, quantity: i64) -> Price {
        self.price.times(quantity)
    }
}
