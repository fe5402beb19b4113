//! Product-location sources.

use crate::error::LoadError;
use crate::model::ProductMarker;
use std::path::PathBuf;

/// Supplier of the current product-location list.
///
/// One call per load; the map replaces its whole collection with whatever a
/// successful fetch returns.
#[allow(async_fn_in_trait)]
pub trait ProductSource {
    async fn fetch(&self) -> Result<Vec<ProductMarker>, LoadError>;
}

/// Fetches the product list from a backend HTTP endpoint.
///
/// Non-2xx responses and transport failures are both load failures; no
/// retries, no timeout beyond the transport's own.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProductSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ProductSource for HttpProductSource {
    async fn fetch(&self) -> Result<Vec<ProductMarker>, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Reads the product list from a JSON file (offline rendering, fixtures).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<ProductMarker>, LoadError> {
        let body = std::fs::read(&self.path)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
