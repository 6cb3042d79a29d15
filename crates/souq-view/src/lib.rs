//! HTML rendering for the Souq storefront.
//!
//! Renders catalog and cart state into HTML fragments the embedding page
//! swaps in: the product grid, individual cards, the availability status,
//! the cart summary, and the load-error message. Rendering is pure string
//! building against domain state; wiring the rendered controls back to
//! storefront commands stays with the embedder.
//!
//! # Example
//!
//! ```rust
//! use souq_core::prelude::*;
//! use souq_view::render_grid;
//!
//! let mut catalog = CatalogStore::new();
//! catalog.load(vec![Product {
//!     id: ProductId::new(1),
//!     name: "Ceramic Mug".to_string(),
//!     description: "Stoneware, 350ml".to_string(),
//!     price: Price::from_decimal(10.0),
//!     image: "mug.webp".to_string(),
//!     stock: StockStatus::InStock,
//!     badge: None,
//! }]);
//!
//! let html = render_grid(catalog.filtered(), AED);
//! assert!(html.contains("Ceramic Mug"));
//! ```

mod card;
mod grid;
mod summary;

pub use card::{render_card, render_status};
pub use grid::{render_grid, render_load_error};
pub use summary::render_summary;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
