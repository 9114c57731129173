//! Text rendering of run results.

use std::fmt::Write;

use crate::app::interactive::InteractiveRun;
use crate::domain::request::preview;
use crate::domain::{AttemptOutcome, RunReport};

const RULE_WIDTH: usize = 60;
const FAILED_PROMPT_PREVIEW: usize = 60;

/// Percentage of successful items, `0.0` when there were none.
pub fn success_rate(successful: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    successful as f64 / total as f64 * 100.0
}

/// Full summary for a batch-file run.
pub fn render_run_report(report: &RunReport) -> String {
    let mut out = String::new();
    let rule = "═".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{rule}\n📊 FINAL SUMMARY\n{rule}\n");

    if report.cancelled {
        let _ = writeln!(out, "⚠️  Run cancelled before every item was processed\n");
    }

    let _ = writeln!(out, "📦 Batch Results:\n");
    for entry in &report.batches {
        let stats = &entry.stats;
        let _ = writeln!(out, "   {}:", entry.name);
        let _ = writeln!(
            out,
            "     ✅ Successful: {}/{} ({:.1}%)",
            stats.successful,
            stats.total,
            success_rate(stats.successful, stats.total)
        );
        let _ = writeln!(out, "     ⏱️  Time: {:.1}s\n", stats.elapsed_seconds());
    }

    let successful: Vec<&AttemptOutcome> = report.successful().collect();
    let failed: Vec<&AttemptOutcome> = report.failed().collect();
    let total = report.outcomes.len();

    let _ = writeln!(out, "📈 Overall Results:\n");
    let _ = writeln!(out, "   ✅ Successful: {}", successful.len());
    let _ = writeln!(out, "   ❌ Failed: {}", failed.len());
    let _ = writeln!(out, "   📝 Total: {}", total);
    let _ = writeln!(out, "   📊 Success Rate: {:.1}%\n", success_rate(successful.len(), total));

    if !successful.is_empty() {
        let _ = writeln!(out, "✅ Successful Generations:\n");
        for (i, outcome) in successful.iter().enumerate() {
            let retry_info = if outcome.succeeded_after_retry() {
                format!(" (after {} attempts)", outcome.attempts)
            } else {
                String::new()
            };
            let _ = writeln!(out, "   {}. [{}] {}{}", i + 1, outcome.batch_name, outcome.keyword, retry_info);
            let _ = writeln!(out, "      {}", outcome.public_url.as_deref().unwrap_or_default());
            for warning in &outcome.warnings {
                let _ = writeln!(out, "      ⚠️  {}", warning);
            }
            out.push('\n');
        }
    }

    if !failed.is_empty() {
        let _ = writeln!(out, "❌ Failed Generations:\n");
        for (i, outcome) in failed.iter().enumerate() {
            let _ = writeln!(out, "   {}. [{}] {}", i + 1, outcome.batch_name, outcome.keyword);
            let _ = writeln!(out, "      Prompt: {}", preview(&outcome.prompt, FAILED_PROMPT_PREVIEW));
            let _ = writeln!(out, "      Error: {}\n", outcome.error.as_deref().unwrap_or("unknown error"));
        }
    }

    out
}

/// Flat summary for interactively collected items.
pub fn render_interactive_summary(run: &InteractiveRun) -> String {
    let outcomes = &run.outcomes;
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);
    let successful: Vec<&AttemptOutcome> = outcomes.iter().filter(|o| o.success).collect();
    let failed: Vec<&AttemptOutcome> = outcomes.iter().filter(|o| !o.success).collect();

    let _ = writeln!(out, "{rule}\n📊 Generation Summary\n{rule}\n");
    if run.cancelled {
        let _ = writeln!(out, "⚠️  Run cancelled before every item was processed\n");
    }
    let _ = writeln!(out, "✅ Successful: {}", successful.len());
    let _ = writeln!(out, "❌ Failed: {}", failed.len());
    let _ = writeln!(out, "📝 Total: {}\n", outcomes.len());

    if !successful.is_empty() {
        let _ = writeln!(out, "Successful generations:");
        for (i, outcome) in successful.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, outcome.keyword);
            let _ = writeln!(out, "     {}\n", outcome.public_url.as_deref().unwrap_or_default());
        }
    }

    if !failed.is_empty() {
        let _ = writeln!(out, "Failed generations:");
        for (i, outcome) in failed.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, outcome.keyword);
            let _ = writeln!(out, "     Error: {}\n", outcome.error.as_deref().unwrap_or("unknown error"));
        }
    }

    out
}
