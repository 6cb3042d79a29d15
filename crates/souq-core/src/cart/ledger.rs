//! Cart ledger and quantity rules.

use crate::cart::CartSummary;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Price;
use std::collections::HashMap;

/// Smallest quantity a cart entry can hold.
pub const MIN_QUANTITY: i64 = 1;

/// Largest quantity a cart entry can hold.
pub const MAX_QUANTITY: i64 = 99;

/// Clamp a requested quantity into the allowed range.
pub fn clamp_quantity(quantity: i64) -> i64 {
    quantity.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

/// Parse a quantity field as typed by the user.
///
/// Empty or non-numeric input falls back to 1; parseable values are
/// clamped into the allowed range.
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .map(clamp_quantity)
        .unwrap_or(MIN_QUANTITY)
}

/// One step up for a quantity field, staying within the allowed range.
pub fn increment_quantity(quantity: i64) -> i64 {
    clamp_quantity(quantity.saturating_add(1))
}

/// One step down for a quantity field, staying within the allowed range.
pub fn decrement_quantity(quantity: i64) -> i64 {
    clamp_quantity(quantity.saturating_sub(1))
}

/// The cart: a map from product id to desired quantity.
///
/// A missing key means "not in cart"; there are no zero entries. The
/// ledger holds ids only and never assumes they still resolve in the
/// catalog. A dataset switch can strand entries, and `summary` skips
/// those instead of erroring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartLedger {
    entries: HashMap<ProductId, i64>,
}

impl CartLedger {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quantity for a product, accumulating with any existing entry.
    ///
    /// The requested quantity is clamped first and the accumulated sum is
    /// clamped again, so repeated adds saturate at [`MAX_QUANTITY`].
    /// Returns the quantity now stored.
    pub fn add(&mut self, id: ProductId, quantity: i64) -> i64 {
        let quantity = clamp_quantity(quantity);
        let entry = self.entries.entry(id).or_insert(0);
        *entry = clamp_quantity(entry.saturating_add(quantity));
        *entry
    }

    /// Overwrite the quantity for a product.
    ///
    /// Unlike [`add`](Self::add) this does not accumulate; it is the
    /// direct-edit path for a quantity field. Values below 1 store 1.
    /// Entries leave the cart through [`remove`](Self::remove) or
    /// [`clear`](Self::clear), never through a quantity write.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> i64 {
        let quantity = clamp_quantity(quantity);
        self.entries.insert(id, quantity);
        quantity
    }

    /// Remove a product from the cart entirely.
    ///
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Clear all entries from the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the stored quantity for a product, or 0 when absent.
    pub fn quantity(&self, id: ProductId) -> i64 {
        self.entries.get(&id).copied().unwrap_or(0)
    }

    /// Whether the cart holds an entry for this product.
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get the number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (product id, quantity) entries. Order is unspecified.
    pub fn entries(&self) -> impl Iterator<Item = (ProductId, i64)> + '_ {
        self.entries.iter().map(|(&id, &quantity)| (id, quantity))
    }

    /// Compute the cart summary against current product data.
    ///
    /// Entries whose id does not resolve contribute to neither the total
    /// nor the item count.
    pub fn summary<'a, F>(&self, resolve: F) -> CartSummary
    where
        F: Fn(ProductId) -> Option<&'a Product>,
    {
        let mut total = Price::ZERO;
        let mut item_count = 0i64;
        for (id, quantity) in self.entries() {
            let Some(product) = resolve(id) else { continue };
            total = total + product.line_total(quantity);
            item_count = item_count.saturating_add(quantity);
        }
        CartSummary { total, item_count }
    }

    /// Drop entries whose id fails the predicate.
    ///
    /// Returns how many entries were removed.
    pub fn prune<F>(&mut self, keep: F) -> usize
    where
        F: Fn(ProductId) -> bool,
    {
        let len_before = self.entries.len();
        self.entries.retain(|&id, _| keep(id));
        len_before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StockStatus;

    fn product(id: i64, price_minor: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            description: String::new(),
            price: Price::from_minor(price_minor),
            image: String::new(),
            stock: StockStatus::InStock,
            badge: None,
        }
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(-5), 1);
        assert_eq!(clamp_quantity(1), 1);
        assert_eq!(clamp_quantity(42), 42);
        assert_eq!(clamp_quantity(99), 99);
        assert_eq!(clamp_quantity(150), 99);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 7 "), 7);
        assert_eq!(parse_quantity("150"), 99);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-2"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("12abc"), 1);
    }

    #[test]
    fn test_stepper_bounds() {
        assert_eq!(increment_quantity(1), 2);
        assert_eq!(increment_quantity(99), 99);
        assert_eq!(decrement_quantity(2), 1);
        assert_eq!(decrement_quantity(1), 1);
    }

    #[test]
    fn test_add_accumulates() {
        let mut cart = CartLedger::new();
        assert_eq!(cart.add(ProductId::new(1), 3), 3);
        assert_eq!(cart.add(ProductId::new(1), 2), 5);
        assert_eq!(cart.quantity(ProductId::new(1)), 5);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_saturates_at_max() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new(1), 60);
        assert_eq!(cart.add(ProductId::new(1), 60), 99);
        assert_eq!(cart.quantity(ProductId::new(1)), 99);
    }

    #[test]
    fn test_add_clamps_request_first() {
        let mut cart = CartLedger::new();
        assert_eq!(cart.add(ProductId::new(1), 150), 99);
        assert_eq!(cart.add(ProductId::new(2), 0), 1);
        assert_eq!(cart.add(ProductId::new(3), -4), 1);
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new(1), 5);
        assert_eq!(cart.set_quantity(ProductId::new(1), 2), 2);
        assert_eq!(cart.quantity(ProductId::new(1)), 2);
    }

    #[test]
    fn test_set_quantity_clamps() {
        let mut cart = CartLedger::new();
        assert_eq!(cart.set_quantity(ProductId::new(1), 150), 99);
        assert_eq!(cart.set_quantity(ProductId::new(1), 0), 1);
        assert!(cart.contains(ProductId::new(1)));
    }

    #[test]
    fn test_remove() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new(1), 2);
        assert!(cart.remove(ProductId::new(1)));
        assert!(!cart.remove(ProductId::new(1)));
        assert_eq!(cart.quantity(ProductId::new(1)), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new(1), 2);
        cart.add(ProductId::new(2), 3);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn test_absent_quantity_is_zero() {
        let cart = CartLedger::new();
        assert_eq!(cart.quantity(ProductId::new(9)), 0);
        assert!(!cart.contains(ProductId::new(9)));
    }

    #[test]
    fn test_summary_totals() {
        let products = vec![product(1, 1000), product(2, 500)];
        let mut cart = CartLedger::new();
        cart.add(ProductId::new(1), 3);
        cart.add(ProductId::new(1), 2);
        cart.add(ProductId::new(2), 1);

        let summary = cart.summary(|id| products.iter().find(|p| p.id == id));
        assert_eq!(summary.total, Price::from_minor(5500));
        assert_eq!(summary.item_count, 6);
    }

    #[test]
    fn test_summary_skips_unresolved_entries() {
        let products = vec![product(1, 1000)];
        let mut cart = CartLedger::new();
        cart.add(ProductId::new(1), 2);
        cart.add(ProductId::new(77), 5);

        let summary = cart.summary(|id| products.iter().find(|p| p.id == id));
        assert_eq!(summary.total, Price::from_minor(2000));
        assert_eq!(summary.item_count, 2);
    }

    #[test]
    fn test_summary_of_empty_cart() {
        let cart = CartLedger::new();
        let summary = cart.summary(|_| None);
        assert_eq!(summary, CartSummary::empty());
    }

    #[test]
    fn test_prune() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new(1), 2);
        cart.add(ProductId::new(2), 3);
        cart.add(ProductId::new(3), 4);

        let dropped = cart.prune(|id| id.value() != 2);
        assert_eq!(dropped, 1);
        assert!(cart.contains(ProductId::new(1)));
        assert!(!cart.contains(ProductId::new(2)));
        assert!(cart.contains(ProductId::new(3)));
    }
}
