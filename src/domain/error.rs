use std::io;

use thiserror::Error;

use crate::domain::batch::ValidationErrors;

/// Library-wide error type for imgbatch operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required credential is absent from the environment.
    #[error("{0} environment variable not set")]
    MissingCredential(&'static str),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Batch file does not exist.
    #[error("File not found: {0}")]
    BatchFileNotFound(String),

    /// Batch file is not well-formed structured data.
    #[error("Invalid {format} syntax: {details}")]
    BatchParse { format: &'static str, details: String },

    /// Batch file is well-formed but structurally invalid.
    #[error(transparent)]
    BatchValidation(#[from] ValidationErrors),

    /// Image generation call failed.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Downloading the generated asset failed.
    #[error("Failed to download image: {0}")]
    Fetch(String),

    /// Uploading the asset failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The run was cancelled while waiting.
    #[error("cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_names_variable() {
        let err = AppError::MissingCredential("SUPABASE_URL");
        assert_eq!(err.to_string(), "SUPABASE_URL environment variable not set");
    }
}
