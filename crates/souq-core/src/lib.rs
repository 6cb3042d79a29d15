//! Catalog and cart domain state for the Souq storefront.
//!
//! This crate holds the two client-side state cores and the rules that
//! govern them:
//!
//! - **Catalog**: the loaded product list plus the search-filtered view
//! - **Cart**: the id-to-quantity ledger with clamping and derived totals
//!
//! Everything here is synchronous and infallible. Loading data and
//! reacting to state changes belong to the surrounding crates.
//!
//! # Example
//!
//! ```rust
//! use souq_core::prelude::*;
//!
//! let mut catalog = CatalogStore::new();
//! catalog.load(vec![Product {
//!     id: ProductId::new(1),
//!     name: "Ceramic Mug".to_string(),
//!     description: "Stoneware, 350ml".to_string(),
//!     price: Price::from_decimal(10.0),
//!     image: String::new(),
//!     stock: StockStatus::InStock,
//!     badge: None,
//! }]);
//!
//! let mut cart = CartLedger::new();
//! cart.add(ProductId::new(1), 3);
//! cart.add(ProductId::new(1), 2);
//!
//! let summary = cart.summary(|id| catalog.find(id));
//! assert_eq!(summary.item_count, 5);
//! assert_eq!(AED.format(summary.total), "AED 50.00");
//! ```

pub mod cart;
pub mod catalog;
pub mod ids;
pub mod money;

pub use cart::{CartLedger, CartSummary};
pub use catalog::{CatalogStore, Product, StockStatus};
pub use ids::ProductId;
pub use money::{Currency, Price, AED};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Price, AED};

    // Catalog
    pub use crate::catalog::{CatalogStore, Product, StockStatus};

    // Cart
    pub use crate::cart::{
        clamp_quantity, decrement_quantity, increment_quantity, parse_quantity, CartLedger,
        CartSummary, MAX_QUANTITY, MIN_QUANTITY,
    };
}
