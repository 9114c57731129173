use crate::domain::AppError;
use crate::ports::{StorageClient, StoreRequest, StoredAsset};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// What the fake store was asked to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub keyword: String,
    pub original_prompt: String,
    pub revised_prompt: Option<String>,
    pub bytes: Vec<u8>,
}

/// In-memory store recording every successful upload.
#[derive(Clone, Default)]
pub struct FakeStorageClient {
    pub stored: Arc<Mutex<Vec<StoredRecord>>>,
    failures: Arc<Mutex<VecDeque<String>>>,
    metadata_warning: Option<String>,
}

impl FakeStorageClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_first(count: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        let storage = Self::default();
        storage.failures.lock().unwrap().extend((0..count).map(|_| message.clone()));
        storage
    }

    /// Store successfully but report a metadata failure every time.
    pub fn with_metadata_warning(message: impl Into<String>) -> Self {
        Self { metadata_warning: Some(message.into()), ..Self::default() }
    }

    pub fn get_stored(&self) -> Vec<StoredRecord> {
        self.stored.lock().unwrap().clone()
    }
}

impl StorageClient for FakeStorageClient {
    fn store(&self, bytes: &[u8], request: StoreRequest<'_>) -> Result<StoredAsset, AppError> {
        if let Some(message) = self.failures.lock().unwrap().pop_front() {
            return Err(AppError::Storage(message));
        }
        let mut stored = self.stored.lock().unwrap();
        stored.push(StoredRecord {
            keyword: request.keyword.to_string(),
            original_prompt: request.original_prompt.to_string(),
            revised_prompt: request.revised_prompt.map(str::to_string),
            bytes: bytes.to_vec(),
        });
        let storage_path = format!("{}_{}.png", request.keyword, stored.len());
        Ok(StoredAsset {
            public_url: format!("https://storage.test/public/{storage_path}"),
            storage_path,
            metadata_warning: self.metadata_warning.clone(),
        })
    }
}
