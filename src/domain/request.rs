use serde::{Deserialize, Serialize};

/// A single asset to generate: a short label plus the provider instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Label used for naming the stored asset and for reporting.
    pub keyword: String,
    /// Natural-language instruction sent to the provider.
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(keyword: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), prompt: prompt.into() }
    }

    /// Prompt shortened for log and report lines.
    pub fn prompt_preview(&self, max_chars: usize) -> String {
        preview(&self.prompt, max_chars)
    }
}

/// Truncate `text` to at most `max_chars` characters, appending `...` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
