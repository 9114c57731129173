//! Bounded retry around one generate, fetch, store attempt.

use std::time::Duration;

use tracing::{error, info, warn};

use crate::app::PipelineContext;
use crate::domain::{AppError, AttemptOutcome, GenerationRequest, RetryConfig};
use crate::ports::{AssetFetcher, GenerationClient, Pacer, StorageClient, StoreRequest, StoredAsset};

/// How many times an item is tried and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    retry_delay: Duration,
}

impl RetryPolicy {
    /// `max_retries` counts every try including the first; at least one is always made.
    pub fn new(max_retries: u32, retry_delay: Duration) -> Self {
        Self { max_retries: max_retries.max(1), retry_delay }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.max_retries, config.retry_delay())
    }
}

/// How an item's attempts ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Stored, or every allowed try failed.
    Finished(AttemptOutcome),
    /// A retry delay was cancelled; the outcome records the tries made before it.
    Cancelled(AttemptOutcome),
}

impl Resolution {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Resolution::Cancelled(_))
    }

    pub fn outcome(&self) -> &AttemptOutcome {
        match self {
            Resolution::Finished(outcome) | Resolution::Cancelled(outcome) => outcome,
        }
    }

    pub fn into_outcome(self) -> AttemptOutcome {
        match self {
            Resolution::Finished(outcome) | Resolution::Cancelled(outcome) => outcome,
        }
    }
}

/// Runs items through the pipeline capabilities under a [`RetryPolicy`].
pub struct RetryExecutor<'a, G, F, S, P>
where
    G: GenerationClient,
    F: AssetFetcher,
    S: StorageClient,
    P: Pacer,
{
    ctx: &'a PipelineContext<G, F, S, P>,
    policy: RetryPolicy,
}

impl<'a, G, F, S, P> RetryExecutor<'a, G, F, S, P>
where
    G: GenerationClient,
    F: AssetFetcher,
    S: StorageClient,
    P: Pacer,
{
    pub fn new(ctx: &'a PipelineContext<G, F, S, P>, policy: RetryPolicy) -> Self {
        Self { ctx, policy }
    }

    /// Resolve `request` to a terminal outcome.
    ///
    /// Each try restarts from generation. Only the last error is kept. A cancelled
    /// retry delay ends the item with the attempts made so far and is reported as
    /// [`Resolution::Cancelled`] so the caller can stop.
    pub fn attempt(&self, request: &GenerationRequest, batch_name: &str) -> Resolution {
        let max = self.policy.max_retries;
        let mut last_error: Option<AppError> = None;

        for attempt in 1..=max {
            if attempt > 1 {
                info!(keyword = %request.keyword, attempt, max, "Retrying");
                if let Err(err) = self.ctx.pacer().pause(self.policy.retry_delay) {
                    warn!(keyword = %request.keyword, "Cancelled while waiting to retry");
                    return Resolution::Cancelled(failed(
                        request,
                        batch_name,
                        attempt - 1,
                        err.to_string(),
                    ));
                }
            }

            match self.try_once(request) {
                Ok(stored) => {
                    info!(keyword = %request.keyword, attempt, url = %stored.public_url, "Image stored");
                    let warnings = stored.metadata_warning.into_iter().collect();
                    return Resolution::Finished(AttemptOutcome {
                        keyword: request.keyword.clone(),
                        prompt: request.prompt.clone(),
                        batch_name: batch_name.to_string(),
                        success: true,
                        attempts: attempt,
                        public_url: Some(stored.public_url),
                        error: None,
                        warnings,
                    });
                }
                Err(err) => {
                    warn!(keyword = %request.keyword, attempt, max, error = %err, "Attempt failed");
                    last_error = Some(err);
                }
            }
        }

        error!(keyword = %request.keyword, attempts = max, "All attempts failed");
        let message = last_error.map(|e| e.to_string()).unwrap_or_else(|| "no attempt made".into());
        Resolution::Finished(failed(request, batch_name, max, message))
    }

    fn try_once(&self, request: &GenerationRequest) -> Result<StoredAsset, AppError> {
        info!(keyword = %request.keyword, prompt = %request.prompt_preview(80), "Generating image");
        let image = self.ctx.generator().generate(&request.prompt)?;
        let bytes = self.ctx.fetcher().fetch(&image.locator)?;
        self.ctx.storage().store(
            &bytes,
            StoreRequest {
                keyword: &request.keyword,
                original_prompt: &request.prompt,
                revised_prompt: image.revised_prompt.as_deref(),
            },
        )
    }
}

fn failed(
    request: &GenerationRequest,
    batch_name: &str,
    attempts: u32,
    error: String,
) -> AttemptOutcome {
    AttemptOutcome {
        keyword: request.keyword.clone(),
        prompt: request.prompt.clone(),
        batch_name: batch_name.to_string(),
        success: false,
        attempts,
        public_url: None,
        error: Some(error),
        warnings: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        FakeAssetFetcher, FakeGenerationClient, FakeStorageClient, RecordingPacer,
    };

    type FakeContext =
        PipelineContext<FakeGenerationClient, FakeAssetFetcher, FakeStorageClient, RecordingPacer>;

    const DELAY: Duration = Duration::from_millis(2000);

    fn context(
        generator: FakeGenerationClient,
        fetcher: FakeAssetFetcher,
        storage: FakeStorageClient,
        pacer: RecordingPacer,
    ) -> FakeContext {
        PipelineContext::new(generator, fetcher, storage, pacer)
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("happy", "a smiling child")
    }

    fn resolve(ctx: &FakeContext, max_retries: u32) -> AttemptOutcome {
        RetryExecutor::new(ctx, RetryPolicy::new(max_retries, DELAY))
            .attempt(&request(), "batch_1")
            .into_outcome()
    }

    #[test]
    fn first_try_success() {
        let ctx = context(
            FakeGenerationClient::new(),
            FakeAssetFetcher::new(),
            FakeStorageClient::new(),
            RecordingPacer::new(),
        );
        let outcome = resolve(&ctx, 3);

        assert!(outcome.success);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.batch_name, "batch_1");
        assert!(outcome.public_url.unwrap().starts_with("https://storage.test/"));
        assert!(ctx.pacer().get_pauses().is_empty());

        let stored = ctx.storage().get_stored();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].keyword, "happy");
        assert_eq!(stored[0].original_prompt, "a smiling child");
        assert_eq!(stored[0].revised_prompt.as_deref(), Some("revised: a smiling child"));
        assert_eq!(stored[0].bytes, b"https://provider.test/images/1.png".to_vec());
    }

    #[test]
    fn success_on_kth_try_waits_k_minus_one_delays() {
        for k in 1..=4u32 {
            let ctx = context(
                FakeGenerationClient::failing_first((k - 1) as usize, "rate limited"),
                FakeAssetFetcher::new(),
                FakeStorageClient::new(),
                RecordingPacer::new(),
            );
            let outcome = resolve(&ctx, 4);

            assert!(outcome.success, "k = {k}");
            assert_eq!(outcome.attempts, k);
            assert_eq!(ctx.pacer().get_pauses(), vec![DELAY; (k - 1) as usize]);
            assert_eq!(ctx.storage().get_stored().len(), 1);
        }
    }

    #[test]
    fn exhausted_retries_report_last_error_and_store_nothing() {
        let ctx = context(
            FakeGenerationClient::with_script(vec![
                Err("quota exceeded".into()),
                Err("server error".into()),
                Err("content policy".into()),
            ]),
            FakeAssetFetcher::new(),
            FakeStorageClient::new(),
            RecordingPacer::new(),
        );
        let outcome = resolve(&ctx, 3);

        assert!(!outcome.success);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(outcome.error.as_deref(), Some("Provider error: content policy"));
        assert_eq!(outcome.public_url, None);
        assert_eq!(ctx.pacer().get_pauses().len(), 2);
        assert!(ctx.storage().get_stored().is_empty());
    }

    #[test]
    fn fetch_failure_restarts_from_generation() {
        let ctx = context(
            FakeGenerationClient::new(),
            FakeAssetFetcher::failing_first(1, "Not Found"),
            FakeStorageClient::new(),
            RecordingPacer::new(),
        );
        let outcome = resolve(&ctx, 3);

        assert!(outcome.success);
        assert_eq!(outcome.attempts, 2);
        assert_eq!(ctx.generator().calls(), 2);
        assert_eq!(
            ctx.fetcher().get_locators(),
            vec!["https://provider.test/images/1.png", "https://provider.test/images/2.png"]
        );
    }

    #[test]
    fn storage_failure_regenerates_image() {
        let ctx = context(
            FakeGenerationClient::new(),
            FakeAssetFetcher::new(),
            FakeStorageClient::failing_first(2, "bucket unavailable"),
            RecordingPacer::new(),
        );
        let outcome = resolve(&ctx, 3);

        assert!(outcome.success);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(ctx.generator().calls(), 3);
        assert_eq!(ctx.storage().get_stored().len(), 1);
    }

    #[test]
    fn metadata_warning_keeps_outcome_successful() {
        let ctx = context(
            FakeGenerationClient::new(),
            FakeAssetFetcher::new(),
            FakeStorageClient::with_metadata_warning("Failed to save to database (500): down"),
            RecordingPacer::new(),
        );
        let outcome = resolve(&ctx, 3);

        assert!(outcome.success);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.warnings, vec!["Failed to save to database (500): down".to_string()]);
        assert!(outcome.public_url.is_some());
    }

    #[test]
    fn cancellation_during_retry_delay_stops_the_item() {
        let ctx = context(
            FakeGenerationClient::always_failing("server error"),
            FakeAssetFetcher::new(),
            FakeStorageClient::new(),
            RecordingPacer::cancelling_on(1),
        );
        let resolution =
            RetryExecutor::new(&ctx, RetryPolicy::new(3, DELAY)).attempt(&request(), "batch_1");

        assert!(resolution.is_cancelled());
        let outcome = resolution.into_outcome();
        assert!(!outcome.success);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.error.as_deref(), Some("cancelled"));
        assert_eq!(ctx.generator().calls(), 1);
    }

    #[test]
    fn exhausted_retries_are_not_cancellations() {
        let ctx = context(
            FakeGenerationClient::always_failing("server error"),
            FakeAssetFetcher::new(),
            FakeStorageClient::new(),
            RecordingPacer::new(),
        );
        let resolution =
            RetryExecutor::new(&ctx, RetryPolicy::new(2, DELAY)).attempt(&request(), "batch_1");

        assert!(!resolution.is_cancelled());
        assert_eq!(resolution.outcome().attempts, 2);
    }

    #[test]
    fn zero_retries_still_tries_once() {
        let policy = RetryPolicy::new(0, DELAY);
        assert_eq!(policy.max_retries(), 1);
    }
}
