mod cancellable_sleeper;
mod dialoguer_prompter;
mod http_asset_fetcher;
mod openai_image_client;
mod supabase_storage_client;

pub use cancellable_sleeper::{CancellableSleeper, CancellationToken};
pub use dialoguer_prompter::DialoguerPrompter;
pub use http_asset_fetcher::HttpAssetFetcher;
pub use openai_image_client::OpenAiImageClient;
pub use supabase_storage_client::SupabaseStorageClient;
