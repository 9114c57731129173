pub mod asset_name;
pub mod batch;
pub mod configuration;
pub mod error;
pub mod outcome;
pub mod request;

pub use batch::{Batch, BatchName, BatchSpec, Defect, ValidationErrors, validate_document};
pub use configuration::{
    Credentials, PacingConfig, PipelineConfig, ProviderConfig, RetryConfig, StorageConfig,
};
pub use error::AppError;
pub use outcome::{AttemptOutcome, BatchEntry, BatchStats, RunReport};
pub use request::GenerationRequest;
