//! In-memory catalog store with a derived search view.

use crate::catalog::Product;
use crate::ids::ProductId;

/// Holds the full product list for the active dataset plus the filtered
/// view derived from the search query.
///
/// The filtered view is always a pure function of the list and the query:
/// `load` and `set_query` are the only mutations and both recompute it, so
/// there is no stale intermediate state to observe.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    query: String,
    visible: Vec<usize>,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog wholesale with a freshly loaded dataset.
    ///
    /// The active query is retained and re-applied against the new list.
    pub fn load(&mut self, products: Vec<Product>) {
        self.products = products;
        self.refilter();
    }

    /// Update the active search query, recomputing the filtered view.
    ///
    /// Returns true when the visible set actually changed, so callers can
    /// skip redundant re-renders. Setting the identical query string is a
    /// no-op.
    pub fn set_query(&mut self, query: &str) -> bool {
        if query == self.query {
            return false;
        }
        self.query = query.to_string();
        let before = std::mem::take(&mut self.visible);
        self.refilter();
        before != self.visible
    }

    fn refilter(&mut self) {
        let needle = self.query.trim().to_lowercase();
        self.visible = if needle.is_empty() {
            (0..self.products.len()).collect()
        } else {
            self.products
                .iter()
                .enumerate()
                .filter(|(_, p)| p.matches(&needle))
                .map(|(i, _)| i)
                .collect()
        };
    }

    /// Iterate over products matching the active query, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &Product> {
        self.visible.iter().map(|&i| &self.products[i])
    }

    /// Number of products in the filtered view.
    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    /// Look up a product by id against the full list.
    ///
    /// Cart totals must resolve products even when the active search hides
    /// them, so this never consults the filtered view.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Whether a product id exists in the full list.
    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// The full product list in dataset order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The active search query exactly as entered.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of products in the full list.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the full list is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
