//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::app::api::{self, RunOptions};
use crate::app::interactive::InteractiveRun;
use crate::app::logging;
use crate::app::reporter::{render_interactive_summary, render_run_report};
use crate::domain::{AppError, RunReport};
use crate::services::DialoguerPrompter;

const FORMAT_HELP: &str = r#"Modes:
  imgbatch <FILE>     Generate every batch in FILE
  imgbatch            Collect prompts interactively

Batch file format (JSON, or YAML for .yaml/.yml):
  {
    "batch_1": [
      { "keyword": "happy", "prompt": "..." },
      { "keyword": "sad", "prompt": "..." }
    ],
    "batch_2": [ ... ]
  }

Batches run in ascending numeric suffix order. Keys that are not
<name>_<number> are ignored.

Environment:
  OPENAI_API_KEY, SUPABASE_URL, SUPABASE_ANON_KEY   required
  SUPABASE_BUCKET_NAME, OPENAI_API_BASE             optional overrides"#;

#[derive(Parser)]
#[command(name = "imgbatch")]
#[command(version)]
#[command(
    about = "Generate image batches and publish them to object storage",
    long_about = None,
    after_long_help = FORMAT_HELP
)]
struct Cli {
    /// Batch file to process; omit for interactive mode
    file: Option<PathBuf>,
    /// Configuration file (defaults to ./imgbatch.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let result = std::env::current_dir().map_err(AppError::from).and_then(|working_dir| {
        let options = RunOptions { config_path: cli.config.clone(), working_dir };
        match &cli.file {
            Some(path) => run_batch(path, &options, cli.json),
            None => run_interactive(&options, cli.json),
        }
    });

    match result {
        Ok(()) => {
            if !cli.json {
                println!("\n✨ Pipeline completed!");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_batch(path: &Path, options: &RunOptions, json: bool) -> Result<(), AppError> {
    if !json {
        println!("📂 Loading batch file: {}", path.display());
    }
    let report = api::run_batch_file(path, options)?;
    print_report(&report, json)
}

fn run_interactive(options: &RunOptions, json: bool) -> Result<(), AppError> {
    if !json {
        println!("💡 Tip: For batch processing, use: imgbatch <file.json>\n");
    }
    let run = match api::run_interactive(options, &DialoguerPrompter) {
        Ok(run) => run,
        Err(AppError::Cancelled) => {
            if !json {
                println!("\nInput cancelled; nothing generated.");
            }
            InteractiveRun { cancelled: true, ..InteractiveRun::default() }
        }
        Err(e) => return Err(e),
    };

    if json {
        println!("{}", to_json(&run)?);
    } else {
        println!("\n{}", render_interactive_summary(&run));
    }
    Ok(())
}

fn print_report(report: &RunReport, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", to_json(report)?);
    } else {
        println!("\n{}", render_run_report(report));
    }
    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Configuration(format!("Failed to serialize report: {}", e)))
}
