//! Storage client for Supabase object storage plus its REST metadata table.

use chrono::Utc;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::asset_name::object_name;
use crate::domain::{AppError, ProviderConfig, StorageConfig};
use crate::ports::{StorageClient, StoreRequest, StoredAsset};

const APIKEY: &str = "apikey";
const X_UPSERT: &str = "x-upsert";
const PREFER: &str = "Prefer";

/// Uploads images to a bucket and records one metadata row per image.
#[derive(Clone)]
pub struct SupabaseStorageClient {
    base_url: String,
    api_key: String,
    bucket: String,
    table: String,
    cache_control: String,
    generation: GenerationSettings,
    client: Client,
}

/// Provider settings copied into every metadata row.
#[derive(Debug, Clone)]
struct GenerationSettings {
    model: String,
    size: String,
    quality: String,
    style: String,
}

impl std::fmt::Debug for SupabaseStorageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseStorageClient")
            .field("base_url", &self.base_url)
            .field("bucket", &self.bucket)
            .field("table", &self.table)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl SupabaseStorageClient {
    pub fn new(
        base_url: &str,
        api_key: String,
        config: &StorageConfig,
        provider: &ProviderConfig,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            bucket: config.bucket.clone(),
            table: config.table.clone(),
            cache_control: config.cache_control.clone(),
            generation: GenerationSettings {
                model: provider.model.clone(),
                size: provider.size.clone(),
                quality: provider.quality.clone(),
                style: provider.style.clone(),
            },
            client,
        })
    }

    /// Public URL for an object in the configured bucket.
    pub fn public_url(&self, object: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base_url, self.bucket, object)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(APIKEY, &self.api_key).header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    fn upload(&self, object: &str, bytes: &[u8]) -> Result<(), AppError> {
        let endpoint = format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, object);
        let response = self
            .authorized(self.client.post(&endpoint))
            .header(CONTENT_TYPE, "image/png")
            .header(CACHE_CONTROL, format!("max-age={}", self.cache_control))
            .header(X_UPSERT, "false")
            .body(bytes.to_vec())
            .send()
            .map_err(|e| AppError::Storage(format!("Upload request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().unwrap_or_default();
        Err(AppError::Storage(format!("Upload failed ({}): {}", status.as_u16(), body.trim())))
    }

    fn insert_metadata(&self, row: &MetadataRow<'_>) -> Result<(), String> {
        let endpoint = format!("{}/rest/v1/{}", self.base_url, self.table);
        let response = self
            .authorized(self.client.post(&endpoint))
            .header(PREFER, "return=minimal")
            .json(&[row])
            .send()
            .map_err(|e| format!("Metadata request failed: {}", e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().unwrap_or_default();
        Err(format!("Failed to save to database ({}): {}", status.as_u16(), body.trim()))
    }
}

#[derive(Debug, Serialize)]
struct MetadataRow<'a> {
    keyword: &'a str,
    original_prompt: &'a str,
    revised_prompt: Option<&'a str>,
    image_url: &'a str,
    storage_path: &'a str,
    model: &'a str,
    size: &'a str,
    quality: &'a str,
    style: &'a str,
    status: &'a str,
    created_at: String,
}

impl StorageClient for SupabaseStorageClient {
    fn store(&self, bytes: &[u8], request: StoreRequest<'_>) -> Result<StoredAsset, AppError> {
        let object = object_name(request.keyword, Utc::now().timestamp_millis());
        debug!(object = %object, bucket = %self.bucket, "Uploading image");
        self.upload(&object, bytes)?;

        let public_url = self.public_url(&object);
        let row = MetadataRow {
            keyword: request.keyword,
            original_prompt: request.original_prompt,
            revised_prompt: request.revised_prompt,
            image_url: &public_url,
            storage_path: &object,
            model: &self.generation.model,
            size: &self.generation.size,
            quality: &self.generation.quality,
            style: &self.generation.style,
            status: "completed",
            created_at: Utc::now().to_rfc3339(),
        };

        let metadata_warning = match self.insert_metadata(&row) {
            Ok(()) => None,
            Err(message) => {
                warn!(object = %object, "{}", message);
                Some(message)
            }
        };

        Ok(StoredAsset { public_url, storage_path: object, metadata_warning })
    }
}
