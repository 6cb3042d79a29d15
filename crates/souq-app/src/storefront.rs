//! The storefront: catalog, cart, and the commands that connect them.

use crate::StateChange;
use souq_core::cart::{clamp_quantity, parse_quantity, CartLedger, CartSummary};
use souq_core::catalog::{CatalogStore, Product, StockStatus};
use souq_core::ids::ProductId;
use souq_core::money::{Currency, Price};
use souq_data::{Dataset, ProductSource, SourceError};
use souq_seo::ItemList;
use tracing::{debug, info, warn};

/// What happens to cart entries when a dataset switch replaces the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartRetention {
    /// Keep every entry. The summary already skips ids the new catalog
    /// cannot resolve, and entries revive if their dataset comes back.
    #[default]
    Tolerate,
    /// Drop entries whose id is absent from the new catalog.
    Prune,
}

/// Ticket identifying one requested dataset load.
///
/// Starting a new load invalidates all earlier tickets, so an early
/// request that resolves late can never overwrite a newer dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGeneration {
    dataset: Dataset,
    generation: u64,
}

impl LoadGeneration {
    /// Get the dataset this load was started for.
    pub fn dataset(&self) -> Dataset {
        self.dataset
    }
}

/// Result of applying a load completion.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The catalog was replaced.
    Applied { products: usize },
    /// The load failed; the previous catalog is untouched.
    Failed { reason: String },
    /// A newer load superseded this one; the completion was discarded.
    Stale,
}

type Listener = Box<dyn FnMut(&StateChange)>;

/// Owns the catalog and cart and turns view commands into state
/// transitions.
///
/// Every method runs synchronously to completion, matching the
/// single-threaded event model of the page. The only suspension point is
/// dataset fetching, which happens between [`begin_load`](Self::begin_load)
/// and [`apply_load`](Self::apply_load) (or inside
/// [`switch_dataset`](Self::switch_dataset), which wraps the pair).
pub struct Storefront {
    catalog: CatalogStore,
    cart: CartLedger,
    currency: Currency,
    retention: CartRetention,
    load_generation: u64,
    listeners: Vec<Listener>,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl Storefront {
    /// Create a storefront with an empty catalog and cart.
    pub fn new() -> Self {
        Self {
            catalog: CatalogStore::new(),
            cart: CartLedger::new(),
            currency: Currency::default(),
            retention: CartRetention::default(),
            load_generation: 0,
            listeners: Vec::new(),
        }
    }

    /// Set the cart retention policy applied on dataset switches.
    pub fn with_retention(mut self, retention: CartRetention) -> Self {
        self.retention = retention;
        self
    }

    /// Set the display currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Register a listener for state change notifications.
    pub fn subscribe(&mut self, listener: impl FnMut(&StateChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, change: StateChange) {
        for listener in &mut self.listeners {
            listener(&change);
        }
    }

    fn emit_cart_changed(&mut self) {
        let summary = self.cart_summary();
        self.emit(StateChange::CartChanged { summary });
    }

    // ---- Catalog loading ----

    /// Start a dataset load, superseding any load still in flight.
    ///
    /// The returned ticket must be handed back to
    /// [`apply_load`](Self::apply_load) together with the fetch result.
    pub fn begin_load(&mut self, dataset: Dataset) -> LoadGeneration {
        self.load_generation += 1;
        debug!(%dataset, generation = self.load_generation, "dataset load started");
        LoadGeneration {
            dataset,
            generation: self.load_generation,
        }
    }

    /// Apply a load completion if its ticket is still the newest one.
    ///
    /// On success the catalog is replaced and the retained search query is
    /// re-applied. On failure the previous catalog stays authoritative and
    /// only a [`StateChange::LoadFailed`] goes out. Completions for
    /// superseded tickets are discarded entirely.
    pub fn apply_load(
        &mut self,
        ticket: LoadGeneration,
        result: Result<Vec<Product>, SourceError>,
    ) -> LoadOutcome {
        if ticket.generation != self.load_generation {
            warn!(dataset = %ticket.dataset, "stale dataset load discarded");
            return LoadOutcome::Stale;
        }

        match result {
            Ok(products) => {
                let count = products.len();
                self.catalog.load(products);
                info!(dataset = %ticket.dataset, products = count, "catalog replaced");
                self.emit(StateChange::CatalogReplaced {
                    dataset: ticket.dataset,
                    products: count,
                });

                if self.retention == CartRetention::Prune {
                    let catalog = &self.catalog;
                    let dropped = self.cart.prune(|id| catalog.contains(id));
                    if dropped > 0 {
                        debug!(dropped, "stranded cart entries pruned");
                        self.emit_cart_changed();
                    }
                }

                LoadOutcome::Applied { products: count }
            }
            Err(err) => {
                let reason = err.to_string();
                warn!(dataset = %ticket.dataset, error = %reason, "dataset load failed, keeping previous catalog");
                self.emit(StateChange::LoadFailed {
                    dataset: ticket.dataset,
                    reason: reason.clone(),
                });
                LoadOutcome::Failed { reason }
            }
        }
    }

    /// Fetch and apply a dataset in one step.
    ///
    /// Convenient when loads cannot overlap. Callers that fire overlapping
    /// switches should use [`begin_load`](Self::begin_load) and
    /// [`apply_load`](Self::apply_load) directly so stale completions are
    /// discarded.
    pub async fn switch_dataset<S>(&mut self, source: &S, dataset: Dataset) -> LoadOutcome
    where
        S: ProductSource + ?Sized,
    {
        let ticket = self.begin_load(dataset);
        let result = source.fetch_products(dataset).await;
        self.apply_load(ticket, result)
    }

    // ---- Search ----

    /// Update the search query from the search field.
    ///
    /// Emits [`StateChange::QueryChanged`] only when the visible set
    /// actually changed.
    pub fn search(&mut self, query: &str) {
        if self.catalog.set_query(query) {
            let visible = self.catalog.filtered_len();
            debug!(query = self.catalog.query(), visible, "search query applied");
            self.emit(StateChange::QueryChanged { visible });
        }
    }

    // ---- Cart commands ----

    /// Add a quantity of a product to the cart.
    ///
    /// Returns the quantity now stored for the product.
    pub fn add_to_cart(&mut self, id: ProductId, quantity: i64) -> i64 {
        let stored = self.cart.add(id, quantity);
        debug!(%id, stored, "product added to cart");
        self.emit_cart_changed();
        stored
    }

    /// Overwrite the cart quantity for a product.
    pub fn set_cart_quantity(&mut self, id: ProductId, quantity: i64) -> i64 {
        let stored = self.cart.set_quantity(id, quantity);
        self.emit_cart_changed();
        stored
    }

    /// Overwrite the cart quantity from raw quantity-field text.
    ///
    /// Empty or non-numeric input coerces to 1, like the field itself.
    pub fn set_cart_quantity_input(&mut self, id: ProductId, raw: &str) -> i64 {
        self.set_cart_quantity(id, parse_quantity(raw))
    }

    /// Remove one product from the cart.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let removed = self.cart.remove(id);
        if removed {
            self.emit_cart_changed();
        }
        removed
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        info!("cart cleared");
        self.emit_cart_changed();
    }

    // ---- Queries ----

    /// Compute the cart summary against the live catalog.
    ///
    /// Entries stranded by a dataset switch contribute nothing.
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary(|id| self.catalog.find(id))
    }

    /// Format the current cart total for display (e.g., "AED 49.99").
    pub fn cart_total_label(&self) -> String {
        self.currency.format(self.cart_summary().total)
    }

    /// Get the stock status for a product, if it exists.
    pub fn availability(&self, id: ProductId) -> Option<StockStatus> {
        self.catalog.find(id).map(|p| p.stock)
    }

    /// Line total for a product at a pending quantity.
    ///
    /// This is the per-card preview before anything is added; the quantity
    /// is clamped the same way the cart would clamp it.
    pub fn line_total(&self, id: ProductId, quantity: i64) -> Option<Price> {
        self.catalog
            .find(id)
            .map(|p| p.line_total(clamp_quantity(quantity)))
    }

    /// Build the structured data document for the current catalog.
    pub fn structured_data(&self) -> ItemList {
        ItemList::from_products(self.catalog.products(), self.currency)
    }

    /// Borrow the catalog store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Borrow the cart ledger.
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// Get the display currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Get the cart retention policy.
    pub fn retention(&self) -> CartRetention {
        self.retention
    }
}
