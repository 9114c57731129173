//! Pipeline configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, PipelineConfig};

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "imgbatch.toml";

/// Load configuration from `explicit`, else from `imgbatch.toml` in `cwd`, else defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<PipelineConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let fallback = cwd.join(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                return Ok(PipelineConfig::default());
            }
            fallback
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<PipelineConfig, AppError> {
    let config: PipelineConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
