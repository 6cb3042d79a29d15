//! Change notifications pushed to the embedding view layer.

use souq_core::cart::CartSummary;
use souq_data::Dataset;

/// State transitions the view layer reacts to.
///
/// The storefront publishes these after each mutation instead of knowing
/// how to render. Subscribers re-query the storefront for whatever detail
/// they need; the variants carry just enough to decide what to redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    /// A dataset finished loading and replaced the catalog.
    CatalogReplaced { dataset: Dataset, products: usize },
    /// A dataset load failed; the previous catalog remains authoritative.
    LoadFailed { dataset: Dataset, reason: String },
    /// The search query changed the filtered view.
    QueryChanged { visible: usize },
    /// A cart mutation, carrying the freshly computed summary.
    CartChanged { summary: CartSummary },
}
