//! Simulated submission collaborator
//!
//! Stands in for a network call: waits a fixed delay, logs what it received
//! and resolves.

use super::traits::Submitter;
use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Default simulated round trip
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Submitter that sleeps and logs instead of talking to a server
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl<T> Submitter<T> for SimulatedSubmitter
where
    T: FormValues + Serialize,
{
    async fn submit(&self, values: &T) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        let payload = serde_json::to_string(values)?;
        tracing::info!(%payload, "Submitted data");
        Ok(())
    }
}
