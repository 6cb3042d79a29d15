//! Product catalog module.
//!
//! Contains the product record types and the in-memory store that drives
//! the filtered grid.

mod product;
mod store;

pub use product::{Product, StockStatus};
pub use store::CatalogStore;
