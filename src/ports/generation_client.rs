//! Image generation provider port definition.

use crate::domain::AppError;

/// Result of a successful generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Where the generated image can be downloaded from.
    pub locator: String,
    /// Prompt as rewritten by the provider, when it reports one.
    pub revised_prompt: Option<String>,
}

/// Port for image generation.
pub trait GenerationClient {
    /// Submit `prompt` and return a locator for the generated image.
    fn generate(&self, prompt: &str) -> Result<GeneratedImage, AppError>;
}
