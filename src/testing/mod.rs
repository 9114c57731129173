pub mod fake_asset_fetcher;
pub mod fake_generation_client;
pub mod fake_storage_client;
pub mod recording_pacer;
pub mod scripted_prompter;

pub use fake_asset_fetcher::FakeAssetFetcher;
pub use fake_generation_client::FakeGenerationClient;
pub use fake_storage_client::FakeStorageClient;
pub use recording_pacer::RecordingPacer;
pub use scripted_prompter::ScriptedPrompter;
