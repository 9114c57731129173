//! Sequential batch processing with request pacing.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::app::PipelineContext;
use crate::app::retry::{RetryExecutor, RetryPolicy};
use crate::domain::{BatchSpec, BatchStats, RunReport};
use crate::ports::{AssetFetcher, GenerationClient, Pacer, StorageClient};

/// Drives every item of a [`BatchSpec`] through the [`RetryExecutor`], one at a time.
pub struct BatchOrchestrator<'a, G, F, S, P>
where
    G: GenerationClient,
    F: AssetFetcher,
    S: StorageClient,
    P: Pacer,
{
    ctx: &'a PipelineContext<G, F, S, P>,
    retry: RetryPolicy,
    inter_request_delay: Duration,
}

impl<'a, G, F, S, P> BatchOrchestrator<'a, G, F, S, P>
where
    G: GenerationClient,
    F: AssetFetcher,
    S: StorageClient,
    P: Pacer,
{
    pub fn new(
        ctx: &'a PipelineContext<G, F, S, P>,
        retry: RetryPolicy,
        inter_request_delay: Duration,
    ) -> Self {
        Self { ctx, retry, inter_request_delay }
    }

    /// Process every batch in suffix order and every item in input order.
    ///
    /// Item failures never stop the run. A cancelled pause, whether between items or
    /// inside an item's retry delay, ends it early with a partial report flagged as
    /// cancelled.
    pub fn run(&self, spec: &BatchSpec) -> RunReport {
        let started = Instant::now();
        let executor = RetryExecutor::new(self.ctx, self.retry);
        let batch_count = spec.batches().len();
        let total = spec.total_items();
        let names: Vec<&str> = spec.batches().iter().map(|b| b.name().as_str()).collect();
        info!(batches = batch_count, total, names = %names.join(", "), "Starting run");

        let mut report = RunReport::default();
        let mut overall = 0usize;

        for (batch_idx, batch) in spec.batches().iter().enumerate() {
            info!(
                batch = %batch.name(),
                position = batch_idx + 1,
                of = batch_count,
                items = batch.len(),
                "Processing batch"
            );
            let batch_started = Instant::now();
            let first = report.outcomes.len();
            let mut cancelled = false;

            for (item_idx, item) in batch.items().iter().enumerate() {
                overall += 1;
                info!(
                    batch = %batch.name(),
                    item = item_idx + 1,
                    of = batch.len(),
                    overall,
                    total,
                    keyword = %item.keyword,
                    "Processing item"
                );
                let resolution = executor.attempt(item, batch.name().as_str());
                let retry_cancelled = resolution.is_cancelled();
                report.outcomes.push(resolution.into_outcome());
                if retry_cancelled {
                    cancelled = true;
                    break;
                }

                if overall < total {
                    info!(
                        delay_ms = self.inter_request_delay.as_millis() as u64,
                        "Waiting before next generation"
                    );
                    if self.ctx.pacer().pause(self.inter_request_delay).is_err() {
                        cancelled = true;
                        break;
                    }
                }
            }

            let stats = BatchStats::from_outcomes(&report.outcomes[first..], batch_started.elapsed());
            info!(
                batch = %batch.name(),
                successful = stats.successful,
                total = stats.total,
                elapsed_secs = %format!("{:.1}", stats.elapsed_seconds()),
                "Batch completed"
            );
            report.record_batch(batch.name(), stats);

            if cancelled {
                warn!(processed = overall, total, "Run cancelled; returning partial report");
                report.cancelled = true;
                break;
            }
        }

        report.elapsed = started.elapsed();
        report
    }
}
