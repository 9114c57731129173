//! Image generation client for the OpenAI images API using reqwest.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AppError, ProviderConfig};
use crate::ports::{GeneratedImage, GenerationClient};

/// HTTP client for `POST /images/generations`.
#[derive(Clone)]
pub struct OpenAiImageClient {
    api_key: String,
    endpoint: String,
    model: String,
    size: String,
    quality: String,
    style: String,
    client: Client,
}

impl std::fmt::Debug for OpenAiImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiImageClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAiImageClient {
    /// Create a new client with the given API key and provider configuration.
    pub fn new(api_key: String, config: &ProviderConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            endpoint: format!("{}/images/generations", config.api_base.as_str().trim_end_matches('/')),
            model: config.model.clone(),
            size: config.size.clone(),
            quality: config.quality.clone(),
            style: config.style.clone(),
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    quality: &'a str,
    style: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GenerationClient for OpenAiImageClient {
    fn generate(&self, prompt: &str) -> Result<GeneratedImage, AppError> {
        let request = ApiRequest {
            model: &self.model,
            prompt,
            n: 1,
            size: &self.size,
            quality: &self.quality,
            style: &self.style,
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "Submitting generation request");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| AppError::Provider(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(AppError::Provider(format!("API error ({}): {}", status.as_u16(), detail)));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::Provider(format!("Failed to parse response: {}", e)))?;

        let image = api_response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Provider("Response contained no images".into()))?;
        let locator =
            image.url.ok_or_else(|| AppError::Provider("No image URL in response".into()))?;

        Ok(GeneratedImage { locator, revised_prompt: image.revised_prompt })
    }
}
