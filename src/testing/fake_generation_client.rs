use crate::domain::AppError;
use crate::ports::{GeneratedImage, GenerationClient};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Generation client that replays scripted results, then succeeds.
#[derive(Clone, Default)]
pub struct FakeGenerationClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    script: Arc<Mutex<VecDeque<Result<(), String>>>>,
    always_fail: Option<String>,
}

impl FakeGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call with `message`.
    pub fn always_failing(message: impl Into<String>) -> Self {
        Self { always_fail: Some(message.into()), ..Self::default() }
    }

    /// Fail the next `count` calls with `message` before succeeding.
    pub fn failing_first(count: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        let client = Self::default();
        client.script.lock().unwrap().extend((0..count).map(|_| Err(message.clone())));
        client
    }

    /// Queue explicit per-call results: `Ok(())` succeeds, `Err(msg)` fails.
    pub fn with_script(results: Vec<Result<(), String>>) -> Self {
        let client = Self::default();
        client.script.lock().unwrap().extend(results);
        client
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, prompt: &str) -> Result<GeneratedImage, AppError> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };
        if let Some(message) = &self.always_fail {
            return Err(AppError::Provider(message.clone()));
        }
        if let Some(Err(message)) = self.script.lock().unwrap().pop_front() {
            return Err(AppError::Provider(message));
        }
        Ok(GeneratedImage {
            locator: format!("https://provider.test/images/{call}.png"),
            revised_prompt: Some(format!("revised: {prompt}")),
        })
    }
}
