//! Storefront composition root for Souq.
//!
//! Wires the catalog store, the cart ledger, the dataset sources, and the
//! structured data emitter into one [`Storefront`] that the view layer
//! drives through commands and observes through [`StateChange`]
//! notifications.
//!
//! # Example
//!
//! ```rust,ignore
//! use souq_app::prelude::*;
//!
//! let mut shop = Storefront::new();
//! shop.subscribe(|change| println!("{change:?}"));
//!
//! let source = HttpSource::new("https://souq.example");
//! shop.switch_dataset(&source, Dataset::Core).await;
//!
//! shop.search("mug");
//! shop.add_to_cart(ProductId::new(1), 2);
//! println!("{}", shop.cart_total_label());
//! ```

mod event;
mod storefront;

pub use event::StateChange;
pub use storefront::{CartRetention, LoadGeneration, LoadOutcome, Storefront};

// Re-export the domain crates for embedders.
pub use souq_core;
pub use souq_data;
pub use souq_seo;
pub use souq_view;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CartRetention, LoadGeneration, LoadOutcome, StateChange, Storefront};

    pub use souq_core::prelude::*;
    pub use souq_data::{Dataset, FileSource, HttpSource, ProductSource, SourceError, StaticSource};
    pub use souq_seo::{schema_availability, ItemList};
    pub use souq_view::{render_card, render_grid, render_load_error, render_status, render_summary};
}
