//! Ad-hoc item collection and generation outside a batch file.

use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::app::PipelineContext;
use crate::app::retry::{RetryExecutor, RetryPolicy};
use crate::domain::{AppError, AttemptOutcome, BatchName, GenerationRequest};
use crate::ports::{AssetFetcher, GenerationClient, ItemPrompter, Pacer, StorageClient};

/// Parse the requested item count; only positive integers are accepted.
pub fn parse_count(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(AppError::Configuration(
            "Invalid number. Please enter a positive integer.".to_string(),
        )),
    }
}

/// Ask for `count` keyword/prompt pairs. Pairs with an empty side are asked again.
pub fn collect_items(
    prompter: &impl ItemPrompter,
    count: usize,
) -> Result<Vec<GenerationRequest>, AppError> {
    let mut items = Vec::with_capacity(count);
    while items.len() < count {
        let n = items.len() + 1;
        let keyword = prompter.ask(&format!("Keyword {n}"))?;
        let prompt = prompter.ask(&format!("Prompt {n}"))?;

        let (keyword, prompt) = (keyword.trim(), prompt.trim());
        if keyword.is_empty() || prompt.is_empty() {
            prompter.notify("⚠️  Empty keyword or prompt, asking again...");
            continue;
        }
        items.push(GenerationRequest::new(keyword, prompt));
    }
    Ok(items)
}

/// Outcomes of an interactive run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InteractiveRun {
    pub outcomes: Vec<AttemptOutcome>,
    pub cancelled: bool,
}

/// Generate `items` one at a time under the synthetic `interactive` batch.
pub fn run_items<G, F, S, P>(
    ctx: &PipelineContext<G, F, S, P>,
    retry: RetryPolicy,
    inter_request_delay: Duration,
    items: &[GenerationRequest],
) -> InteractiveRun
where
    G: GenerationClient,
    F: AssetFetcher,
    S: StorageClient,
    P: Pacer,
{
    let batch = BatchName::interactive();
    let executor = RetryExecutor::new(ctx, retry);
    let mut run = InteractiveRun::default();

    info!(total = items.len(), "Starting interactive generation");
    for (idx, item) in items.iter().enumerate() {
        info!(item = idx + 1, of = items.len(), keyword = %item.keyword, "Processing item");
        let resolution = executor.attempt(item, batch.as_str());
        let retry_cancelled = resolution.is_cancelled();
        run.outcomes.push(resolution.into_outcome());

        let pause_cancelled =
            !retry_cancelled && idx + 1 < items.len() && ctx.pacer().pause(inter_request_delay).is_err();
        if retry_cancelled || pause_cancelled {
            warn!(processed = idx + 1, total = items.len(), "Interactive run cancelled");
            run.cancelled = true;
            break;
        }
    }
    run
}
