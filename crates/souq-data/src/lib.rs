//! Product dataset sources for the Souq storefront.
//!
//! The storefront loads its catalog from named dataset files. This crate
//! defines the [`Dataset`] names, the [`ProductSource`] trait that
//! supplies their contents, and the source implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use souq_data::{Dataset, HttpSource, ProductSource};
//!
//! let source = HttpSource::new("https://souq.example");
//! let products = source.fetch_products(Dataset::Core).await?;
//! ```

mod dataset;
mod error;
mod source;

pub use dataset::Dataset;
pub use error::SourceError;
pub use source::{FileSource, HttpSource, ProductSource, StaticSource};
