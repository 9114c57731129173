//! Shared testing utilities for imgbatch CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CREDENTIAL_VARS: [&str; 5] = [
    "OPENAI_API_KEY",
    "OPENAI_API_BASE",
    "SUPABASE_URL",
    "SUPABASE_ANON_KEY",
    "SUPABASE_BUCKET_NAME",
];

/// Fast retry and pacing settings so runs finish quickly.
pub const FAST_CONFIG: &str = r#"
[retry]
max_retries = 2
retry_delay_ms = 1

[pacing]
inter_request_delay_ms = 1

[provider]
timeout_secs = 5

[storage]
timeout_secs = 5
"#;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used as the CLI working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled binary with no credentials in its environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("imgbatch").expect("Failed to locate imgbatch binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        for var in CREDENTIAL_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Build a command whose provider and storage both point at `base_url`.
    pub fn cli_against(&self, base_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("OPENAI_API_KEY", "sk-test")
            .env("OPENAI_API_BASE", base_url)
            .env("SUPABASE_URL", base_url)
            .env("SUPABASE_ANON_KEY", "anon-key");
        cmd
    }

    /// Write a file into the working directory and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `imgbatch.toml` with fast timings.
    pub fn write_fast_config(&self) {
        self.write("imgbatch.toml", FAST_CONFIG);
    }
}
