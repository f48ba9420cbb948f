//! Error types for the planner surfaces that can actually fail.
//!
//! The allocator itself never errors: bad durations and windows are repaired
//! in place, and every other "failure" is a policy outcome. What remains is
//! the wire boundary — decoding the upstream payload.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    /// The upstream payload was not valid JSON or did not match the
    /// expected shape.
    #[error("invalid planner payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Convenience alias used throughout cramplan-core.
pub type Result<T> = std::result::Result<T, PlanError>;
