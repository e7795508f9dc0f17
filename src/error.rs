//! Errors surfaced by the form controller

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A submission is already in flight for this form
    #[error("A submission is already in progress")]
    AlreadySubmitting,
    /// The submission collaborator rejected
    #[error("Submission failed: {0}")]
    Submission(String),
    /// The submission collaborator did not settle in time
    #[error("Submission timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),
}

pub type FormResult<T> = Result<T, FormError>;
