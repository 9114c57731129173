use crate::domain::AppError;
use crate::ports::AssetFetcher;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Fetcher that returns fixed bytes unless a failure is queued.
#[derive(Clone, Default)]
pub struct FakeAssetFetcher {
    pub locators: Arc<Mutex<Vec<String>>>,
    failures: Arc<Mutex<VecDeque<String>>>,
}

impl FakeAssetFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_first(count: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        let fetcher = Self::default();
        fetcher.failures.lock().unwrap().extend((0..count).map(|_| message.clone()));
        fetcher
    }

    pub fn get_locators(&self) -> Vec<String> {
        self.locators.lock().unwrap().clone()
    }
}

impl AssetFetcher for FakeAssetFetcher {
    fn fetch(&self, locator: &str) -> Result<Vec<u8>, AppError> {
        self.locators.lock().unwrap().push(locator.to_string());
        if let Some(message) = self.failures.lock().unwrap().pop_front() {
            return Err(AppError::Fetch(message));
        }
        Ok(locator.as_bytes().to_vec())
    }
}
