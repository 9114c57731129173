use crate::domain::AppError;
use crate::ports::ItemPrompter;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Prompter that answers from a queue; an exhausted queue behaves like Ctrl-C.
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<String>>>,
    pub asked: Arc<Mutex<Vec<String>>>,
    pub notices: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompter = Self::default();
        prompter.answers.lock().unwrap().extend(answers.into_iter().map(Into::into));
        prompter
    }

    pub fn get_asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn get_notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl ItemPrompter for ScriptedPrompter {
    fn ask(&self, label: &str) -> Result<String, AppError> {
        self.asked.lock().unwrap().push(label.to_string());
        self.answers.lock().unwrap().pop_front().ok_or(AppError::Cancelled)
    }

    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}
