use std::time::Duration;

use crate::domain::AppError;

/// Port for timed suspensions between provider calls.
pub trait Pacer {
    /// Wait for `duration`.
    ///
    /// Returns [`AppError::Cancelled`] when the wait was interrupted, or when the
    /// pacer had already been cancelled.
    fn pause(&self, duration: Duration) -> Result<(), AppError>;
}
