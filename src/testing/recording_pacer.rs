use crate::domain::AppError;
use crate::ports::Pacer;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Pacer that returns immediately and records every requested pause.
#[derive(Clone, Default)]
pub struct RecordingPacer {
    pub pauses: Arc<Mutex<Vec<Duration>>>,
    cancel_on: Option<usize>,
    sticky: bool,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report cancellation on the `n`th pause (1-based) and every pause after it.
    pub fn cancelling_on(n: usize) -> Self {
        Self { cancel_on: Some(n), sticky: true, ..Self::default() }
    }

    /// Report cancellation on the `n`th pause only; later pauses complete normally.
    pub fn cancelling_once_on(n: usize) -> Self {
        Self { cancel_on: Some(n), sticky: false, ..Self::default() }
    }

    pub fn get_pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }

    pub fn count_of(&self, duration: Duration) -> usize {
        self.pauses.lock().unwrap().iter().filter(|d| **d == duration).count()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&self, duration: Duration) -> Result<(), AppError> {
        let mut pauses = self.pauses.lock().unwrap();
        pauses.push(duration);
        match self.cancel_on {
            Some(n) if pauses.len() == n || (self.sticky && pauses.len() > n) => {
                Err(AppError::Cancelled)
            }
            _ => Ok(()),
        }
    }
}
