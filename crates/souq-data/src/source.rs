//! Product sources.
//!
//! A [`ProductSource`] supplies the product list backing a named dataset.
//! The HTTP source is the production path; the file and static sources
//! back local tooling and tests.

use crate::{Dataset, SourceError};
use async_trait::async_trait;
use souq_core::catalog::Product;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Supplies product lists for named datasets.
#[async_trait]
pub trait ProductSource {
    /// Fetch and parse the product list backing `dataset`.
    async fn fetch_products(&self, dataset: Dataset) -> Result<Vec<Product>, SourceError>;
}

/// Fetches dataset files over HTTP.
///
/// Requests carry `Cache-Control: no-store` so a dataset switch always
/// observes the latest file rather than a cached copy.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source rooted at `base_url` (e.g., the site origin).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a source that reuses an existing HTTP client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub(crate) fn url_for(&self, dataset: Dataset) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            dataset.file_name()
        )
    }
}

#[async_trait]
impl ProductSource for HttpSource {
    async fn fetch_products(&self, dataset: Dataset) -> Result<Vec<Product>, SourceError> {
        let url = self.url_for(dataset);
        debug!(%url, "fetching product file");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "product file request rejected");
            return Err(SourceError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        debug!(%url, count = products.len(), "product file loaded");
        Ok(products)
    }
}

/// Reads dataset files from a local directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Create a source that reads from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ProductSource for FileSource {
    async fn fetch_products(&self, dataset: Dataset) -> Result<Vec<Product>, SourceError> {
        let path = self.root.join(dataset.file_name());
        let bytes = tokio::fs::read(&path).await.map_err(|source| SourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        debug!(path = %path.display(), count = products.len(), "product file loaded");
        Ok(products)
    }
}

/// Serves registered product lists from memory.
///
/// Useful in tests and anywhere the data is embedded rather than fetched.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    data: HashMap<Dataset, Vec<Product>>,
}

impl StaticSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the product list served for `dataset`.
    pub fn with_dataset(mut self, dataset: Dataset, products: Vec<Product>) -> Self {
        self.data.insert(dataset, products);
        self
    }
}

#[async_trait]
impl ProductSource for StaticSource {
    async fn fetch_products(&self, dataset: Dataset) -> Result<Vec<Product>, SourceError> {
        self.data
            .get(&dataset)
            .cloned()
            .ok_or_else(|| SourceError::MissingDataset(dataset.to_string()))
    }
}
