//! Submission collaborators

mod client;
mod traits;

pub use client::{SimulatedSubmitter, DEFAULT_DELAY};
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
