//! Trait abstraction for the submission collaborator to enable mocking in tests

use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// The external save action a form hands its values to.
///
/// Implementations must settle exactly once per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter<T: FormValues>: Send + Sync {
    /// Submit a snapshot of the form's values
    async fn submit(&self, values: &T) -> Result<()>;
}
