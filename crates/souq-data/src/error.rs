//! Data source error types.

use thiserror::Error;

/// Errors that can occur while loading a product dataset.
///
/// The display text doubles as the load-failure message shown in place of
/// the product grid, so it stays human-readable.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The server answered with a non-success status.
    #[error("Failed to load product file: HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// The request could not be completed.
    #[error("Request failed: {0}")]
    Request(String),

    /// Reading a local dataset file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload was not a valid product list.
    #[error("Failed to parse product data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The source has no data registered for the requested dataset.
    #[error("No data registered for dataset {0}")]
    MissingDataset(String),
}
