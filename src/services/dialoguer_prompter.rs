//! Terminal prompting via dialoguer.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::ItemPrompter;

/// Reads answers from the terminal. Empty answers are allowed so the caller decides
/// how to treat them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl ItemPrompter for DialoguerPrompter {
    fn ask(&self, label: &str) -> Result<String, AppError> {
        match Input::<String>::new().with_prompt(label).allow_empty(true).interact_text() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err))
                if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
            {
                Err(AppError::Cancelled)
            }
            Err(err) => Err(AppError::Configuration(format!("Failed to read input: {}", err))),
        }
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}
