pub mod credentials;
pub mod loader;
pub mod pipeline_config;

pub use credentials::Credentials;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
pub use pipeline_config::{
    PacingConfig, PipelineConfig, ProviderConfig, RetryConfig, StorageConfig,
};
