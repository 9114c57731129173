//! imgbatch: generate image batches through a provider API and publish them to storage.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{Pipeline, RunOptions, run_batch_file, run_interactive};
pub use app::interactive::InteractiveRun;
pub use app::loader::{BatchFormat, load_batch_file, parse_document};
pub use app::reporter::{render_interactive_summary, render_run_report, success_rate};
pub use domain::{
    AppError, AttemptOutcome, BatchSpec, BatchStats, Defect, GenerationRequest, RunReport,
    ValidationErrors, validate_document,
};
pub use services::CancellationToken;
