//! Pipeline configuration domain models.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `imgbatch.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Retry policy for a single item.
    #[serde(default)]
    pub retry: RetryConfig,
    /// Spacing between provider calls.
    #[serde(default)]
    pub pacing: PacingConfig,
    /// Image generation provider configuration.
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Object storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.retry.validate()?;
        self.provider.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    /// Maximum attempts per item, including the first.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay between attempts in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: default_max_retries(), retry_delay_ms: default_delay_ms() }
    }
}

impl RetryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_retries == 0 {
            return Err(AppError::InvalidConfig("max_retries must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

/// Request pacing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PacingConfig {
    /// Pause between consecutive items in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub inter_request_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self { inter_request_delay_ms: default_delay_ms() }
    }
}

impl PacingConfig {
    pub fn inter_request_delay(&self) -> Duration {
        Duration::from_millis(self.inter_request_delay_ms)
    }
}

/// Image generation provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API base URL; `/images/generations` is appended.
    #[serde(default = "default_api_base")]
    pub api_base: Url,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_size")]
    pub size: String,
    #[serde(default = "default_quality")]
    pub quality: String,
    #[serde(default = "default_style")]
    pub style: String,
    /// Request timeout in seconds.
    #[serde(default = "default_provider_timeout")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            size: default_size(),
            quality: default_quality(),
            style: default_style(),
            timeout_secs: default_provider_timeout(),
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "provider.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("provider.model must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Storage bucket receiving the images.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Table receiving one metadata row per image.
    #[serde(default = "default_table")]
    pub table: String,
    /// `Cache-Control` value sent with uploads.
    #[serde(default = "default_cache_control")]
    pub cache_control: String,
    /// Request timeout in seconds.
    #[serde(default = "default_storage_timeout")]
    pub timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            table: default_table(),
            cache_control: default_cache_control(),
            timeout_secs: default_storage_timeout(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "storage.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.bucket.trim().is_empty() {
            return Err(AppError::InvalidConfig("storage.bucket must not be empty".to_string()));
        }
        if self.table.trim().is_empty() {
            return Err(AppError::InvalidConfig("storage.table must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_api_base() -> Url {
    Url::parse("https://api.openai.com/v1").expect("Default API base must be valid")
}

fn default_model() -> String {
    "dall-e-3".to_string()
}

fn default_size() -> String {
    "1024x1024".to_string()
}

fn default_quality() -> String {
    "hd".to_string()
}

fn default_style() -> String {
    "natural".to_string()
}

fn default_provider_timeout() -> u64 {
    120
}

fn default_bucket() -> String {
    "dall-e-images".to_string()
}

fn default_table() -> String {
    "generated_images".to_string()
}

fn default_cache_control() -> String {
    "3600".to_string()
}

fn default_storage_timeout() -> u64 {
    60
}
