//! Batch file loading: read, parse, validate.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::domain::{AppError, BatchSpec, validate_document};

/// Syntax of a batch file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Json,
    Yaml,
}

impl BatchFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                BatchFormat::Yaml
            }
            _ => BatchFormat::Json,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BatchFormat::Json => "JSON",
            BatchFormat::Yaml => "YAML",
        }
    }
}

/// Load and validate the batch file at `path`.
pub fn load_batch_file(path: &Path) -> Result<BatchSpec, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            let shown = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            AppError::BatchFileNotFound(shown.display().to_string())
        } else {
            AppError::Io(err)
        }
    })?;

    let document = parse_document(&content, BatchFormat::from_path(path))?;
    Ok(validate_document(&document)?)
}

/// Parse raw content into a structured value without any structural checks.
pub fn parse_document(content: &str, format: BatchFormat) -> Result<Value, AppError> {
    let parsed = match format {
        BatchFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        BatchFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|details| AppError::BatchParse { format: format.name(), details })
}
