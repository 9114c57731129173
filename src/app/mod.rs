pub mod api;
pub mod cli;
pub mod interactive;
pub mod loader;
pub mod logging;
pub mod orchestrator;
pub mod reporter;
pub mod retry;
mod context;

pub use context::PipelineContext;
