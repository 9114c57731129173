//! Provider and storage credentials sourced from the environment.

use std::fmt;

use crate::domain::AppError;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_API_BASE: &str = "OPENAI_API_BASE";
pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const SUPABASE_BUCKET_NAME: &str = "SUPABASE_BUCKET_NAME";

/// Secrets and endpoints that must never appear in configuration files.
#[derive(Clone)]
pub struct Credentials {
    pub provider_api_key: String,
    /// Override for `provider.api_base`.
    pub provider_api_base: Option<String>,
    pub storage_url: String,
    pub storage_key: String,
    /// Override for `storage.bucket`.
    pub storage_bucket: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("provider_api_key", &"[REDACTED]")
            .field("provider_api_base", &self.provider_api_base)
            .field("storage_url", &self.storage_url)
            .field("storage_key", &"[REDACTED]")
            .field("storage_bucket", &self.storage_bucket)
            .finish()
    }
}

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`; blank values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |name: &'static str| get(name).ok_or(AppError::MissingCredential(name));

        Ok(Self {
            provider_api_key: require(OPENAI_API_KEY)?,
            provider_api_base: get(OPENAI_API_BASE),
            storage_url: require(SUPABASE_URL)?,
            storage_key: require(SUPABASE_ANON_KEY)?,
            storage_bucket: get(SUPABASE_BUCKET_NAME),
        })
    }
}
