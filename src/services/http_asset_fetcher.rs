//! Asset download over plain HTTP.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::AssetFetcher;

/// Downloads generated images from the locator returned by the provider.
#[derive(Debug, Clone)]
pub struct HttpAssetFetcher {
    client: Client,
}

impl HttpAssetFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl AssetFetcher for HttpAssetFetcher {
    fn fetch(&self, locator: &str) -> Result<Vec<u8>, AppError> {
        let response = self.client.get(locator).send().map_err(|e| AppError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unexpected status");
            return Err(AppError::Fetch(format!("{} {}", status.as_u16(), reason)));
        }

        let bytes = response.bytes().map_err(|e| AppError::Fetch(e.to_string()))?;
        debug!(size_kb = bytes.len() as f64 / 1024.0, "Downloaded image");
        Ok(bytes.to_vec())
    }
}
