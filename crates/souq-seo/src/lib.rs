//! schema.org structured data for the Souq storefront.
//!
//! Serializes the full catalog into a JSON-LD `ItemList` document so
//! search engines see every product, including ones the active search
//! hides. The document is purely derived from catalog state; injecting it
//! into the page belongs to the embedding layer.

use serde::Serialize;
use souq_core::catalog::{Product, StockStatus};
use souq_core::money::Currency;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Get the schema.org availability URL for a stock status.
pub fn schema_availability(stock: StockStatus) -> &'static str {
    match stock {
        StockStatus::InStock => "https://schema.org/InStock",
        StockStatus::LowStock => "https://schema.org/LimitedAvailability",
        StockStatus::NotAvailable => "https://schema.org/OutOfStock",
    }
}

/// The root JSON-LD document: a schema.org `ItemList` over the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ItemList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub item_type: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

/// One positioned entry of the item list.
#[derive(Debug, Clone, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub item_type: &'static str,
    /// 1-based position in catalog order.
    pub position: usize,
    pub item: ProductData,
}

/// A schema.org `Product` node.
#[derive(Debug, Clone, Serialize)]
pub struct ProductData {
    #[serde(rename = "@type")]
    pub item_type: &'static str,
    pub name: String,
    pub image: String,
    pub description: String,
    /// Stringified product id; the datasets have no separate SKU field.
    pub sku: String,
    pub offers: Offer,
}

/// A schema.org `Offer` node.
#[derive(Debug, Clone, Serialize)]
pub struct Offer {
    #[serde(rename = "@type")]
    pub item_type: &'static str,
    /// Decimal price in the display currency.
    pub price: f64,
    #[serde(rename = "priceCurrency")]
    pub price_currency: &'static str,
    /// schema.org availability URL.
    pub availability: &'static str,
}

impl ItemList {
    /// Build the document from the full catalog, in dataset order.
    pub fn from_products(products: &[Product], currency: Currency) -> Self {
        let item_list_element = products
            .iter()
            .enumerate()
            .map(|(index, product)| ListItem {
                item_type: "ListItem",
                position: index + 1,
                item: ProductData {
                    item_type: "Product",
                    name: product.name.clone(),
                    image: product.image.clone(),
                    description: product.description.clone(),
                    sku: product.id.to_string(),
                    offers: Offer {
                        item_type: "Offer",
                        price: product.price.to_decimal(),
                        price_currency: currency.code(),
                        availability: schema_availability(product.stock),
                    },
                },
            })
            .collect();

        Self {
            context: SCHEMA_CONTEXT,
            item_type: "ItemList",
            item_list_element,
        }
    }

    /// Render the document as a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
