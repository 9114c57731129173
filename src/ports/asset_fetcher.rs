use crate::domain::AppError;

/// Port for downloading generated assets.
pub trait AssetFetcher {
    /// Retrieve the raw bytes behind `locator`.
    fn fetch(&self, locator: &str) -> Result<Vec<u8>, AppError>;
}
