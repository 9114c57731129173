mod asset_fetcher;
mod generation_client;
mod item_prompter;
mod pacer;
mod storage_client;

pub use asset_fetcher::AssetFetcher;
pub use generation_client::{GeneratedImage, GenerationClient};
pub use item_prompter::ItemPrompter;
pub use pacer::Pacer;
pub use storage_client::{StorageClient, StoreRequest, StoredAsset};
