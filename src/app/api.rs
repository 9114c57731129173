//! API facade for the application.
//!
//! Builds the live adapters from configuration and credentials, then runs either a
//! batch file or an interactive session through them.

use std::path::{Path, PathBuf};

use url::Url;

use crate::app::interactive::{self, InteractiveRun};
use crate::app::loader::load_batch_file;
use crate::app::orchestrator::BatchOrchestrator;
use crate::app::retry::RetryPolicy;
use crate::app::PipelineContext;
use crate::domain::configuration::load_config;
use crate::domain::{AppError, BatchSpec, Credentials, PipelineConfig, RunReport};
use crate::ports::ItemPrompter;
use crate::services::{
    CancellableSleeper, CancellationToken, HttpAssetFetcher, OpenAiImageClient,
    SupabaseStorageClient,
};

/// Where to look for configuration.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit `--config` path.
    pub config_path: Option<PathBuf>,
    /// Directory searched for `imgbatch.toml` when no explicit path is given.
    pub working_dir: PathBuf,
}

type LiveContext =
    PipelineContext<OpenAiImageClient, HttpAssetFetcher, SupabaseStorageClient, CancellableSleeper>;

/// A configured pipeline backed by the real provider and store.
pub struct Pipeline {
    ctx: LiveContext,
    config: PipelineConfig,
    token: CancellationToken,
}

impl Pipeline {
    /// Load configuration and credentials and construct the adapters.
    ///
    /// Fails before any batch is read when configuration or credentials are unusable.
    pub fn prepare(options: &RunOptions) -> Result<Self, AppError> {
        let config = load_config(options.config_path.as_deref(), &options.working_dir)?;
        let credentials = Credentials::from_env()?;
        Self::from_parts(config, &credentials)
    }

    pub fn from_parts(mut config: PipelineConfig, credentials: &Credentials) -> Result<Self, AppError> {
        apply_overrides(&mut config, credentials)?;
        config.validate()?;

        let generator = OpenAiImageClient::new(credentials.provider_api_key.clone(), &config.provider)?;
        let fetcher = HttpAssetFetcher::new(config.provider.timeout())?;
        let storage = SupabaseStorageClient::new(
            &credentials.storage_url,
            credentials.storage_key.clone(),
            &config.storage,
            &config.provider,
        )?;
        let token = CancellationToken::new();
        let pacer = CancellableSleeper::new(token.clone());

        Ok(Self { ctx: PipelineContext::new(generator, fetcher, storage, pacer), config, token })
    }

    /// Token that interrupts pending pauses and ends the run early.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run_batch(&self, spec: &BatchSpec) -> RunReport {
        BatchOrchestrator::new(
            &self.ctx,
            RetryPolicy::from(&self.config.retry),
            self.config.pacing.inter_request_delay(),
        )
        .run(spec)
    }

    /// Ask for items through `prompter`, then generate them.
    pub fn run_interactive(&self, prompter: &impl ItemPrompter) -> Result<InteractiveRun, AppError> {
        let count = interactive::parse_count(&prompter.ask("How many images would you like to generate?")?)?;
        prompter.notify(&format!("\n📝 Please enter {count} prompt(s) with keywords:\n"));
        let items = interactive::collect_items(prompter, count)?;

        prompter.notify(&format!("\n🎬 Starting image generation for {} prompt(s)...", items.len()));
        Ok(interactive::run_items(
            &self.ctx,
            RetryPolicy::from(&self.config.retry),
            self.config.pacing.inter_request_delay(),
            &items,
        ))
    }
}

fn apply_overrides(config: &mut PipelineConfig, credentials: &Credentials) -> Result<(), AppError> {
    if let Some(base) = &credentials.provider_api_base {
        config.provider.api_base = Url::parse(base)
            .map_err(|e| AppError::InvalidConfig(format!("OPENAI_API_BASE is not a valid URL: {}", e)))?;
    }
    if let Some(bucket) = &credentials.storage_bucket {
        config.storage.bucket = bucket.clone();
    }
    Ok(())
}

/// Run every batch in the file at `path`.
pub fn run_batch_file(path: &Path, options: &RunOptions) -> Result<RunReport, AppError> {
    let pipeline = Pipeline::prepare(options)?;
    let spec = load_batch_file(path)?;
    Ok(pipeline.run_batch(&spec))
}

/// Collect items interactively and generate them.
pub fn run_interactive(
    options: &RunOptions,
    prompter: &impl ItemPrompter,
) -> Result<InteractiveRun, AppError> {
    Pipeline::prepare(options)?.run_interactive(prompter)
}
