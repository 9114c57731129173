//! Timed suspension that a [`CancellationToken`] can interrupt.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

use crate::domain::AppError;
use crate::ports::Pacer;

/// Shared flag that interrupts every pending and future pause once set.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let (flag, signal) = &*self.inner;
        *flag.lock().unwrap_or_else(PoisonError::into_inner) = true;
        signal.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block for `duration` or until cancelled; returns `true` when cancelled.
    fn wait(&self, duration: Duration) -> bool {
        let (flag, signal) = &*self.inner;
        let guard = flag.lock().unwrap_or_else(PoisonError::into_inner);
        let (guard, _) = signal
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }
}

/// Default [`Pacer`]: sleeps on a condition variable tied to a cancellation token.
#[derive(Debug, Clone, Default)]
pub struct CancellableSleeper {
    token: CancellationToken,
}

impl CancellableSleeper {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl Pacer for CancellableSleeper {
    fn pause(&self, duration: Duration) -> Result<(), AppError> {
        if self.token.wait(duration) { Err(AppError::Cancelled) } else { Ok(()) }
    }
}
