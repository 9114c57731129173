//! Per-item and per-batch results of a run.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::domain::batch::BatchName;

/// Terminal result for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptOutcome {
    pub keyword: String,
    pub prompt: String,
    pub batch_name: String,
    pub success: bool,
    pub attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl AttemptOutcome {
    pub fn succeeded_after_retry(&self) -> bool {
        self.success && self.attempts > 1
    }
}

/// Counts and wall time for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    #[serde(rename = "elapsed_seconds", serialize_with = "as_seconds")]
    pub elapsed: Duration,
}

impl BatchStats {
    pub fn from_outcomes(outcomes: &[AttemptOutcome], elapsed: Duration) -> Self {
        let successful = outcomes.iter().filter(|o| o.success).count();
        Self { total: outcomes.len(), successful, failed: outcomes.len() - successful, elapsed }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Stats recorded against one batch name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub name: String,
    #[serde(flatten)]
    pub stats: BatchStats,
}

/// Everything a batch run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    /// Outcomes in processing order across all batches.
    pub outcomes: Vec<AttemptOutcome>,
    /// Stats per batch, in processing order.
    pub batches: Vec<BatchEntry>,
    #[serde(rename = "elapsed_seconds", serialize_with = "as_seconds")]
    pub elapsed: Duration,
    /// Set when a cancellation ended the run before every item was attempted.
    pub cancelled: bool,
}

impl RunReport {
    pub fn record_batch(&mut self, name: &BatchName, stats: BatchStats) {
        self.batches.push(BatchEntry { name: name.to_string(), stats });
    }

    pub fn batch_stats(&self, name: &str) -> Option<&BatchStats> {
        self.batches.iter().find(|entry| entry.name == name).map(|entry| &entry.stats)
    }

    pub fn successful(&self) -> impl Iterator<Item = &AttemptOutcome> {
        self.outcomes.iter().filter(|o| o.success)
    }

    pub fn failed(&self) -> impl Iterator<Item = &AttemptOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }
}

fn as_seconds<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}
