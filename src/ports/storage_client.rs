//! Durable storage port definition.

use crate::domain::AppError;

/// Description of the asset being stored, recorded alongside it as metadata.
#[derive(Debug, Clone, Copy)]
pub struct StoreRequest<'a> {
    pub keyword: &'a str,
    pub original_prompt: &'a str,
    pub revised_prompt: Option<&'a str>,
}

/// Result of storing an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    /// Publicly reachable URL of the stored asset.
    pub public_url: String,
    /// Path of the object inside the store.
    pub storage_path: String,
    /// Set when the asset was stored but its metadata record could not be written.
    pub metadata_warning: Option<String>,
}

/// Port for durable asset storage.
pub trait StorageClient {
    /// Store `bytes` and persist one metadata record describing them.
    ///
    /// A metadata failure is not an error: the asset is already stored, so it is
    /// reported through [`StoredAsset::metadata_warning`].
    fn store(&self, bytes: &[u8], request: StoreRequest<'_>) -> Result<StoredAsset, AppError>;
}
