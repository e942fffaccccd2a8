//! Selection Error Types
//!
//! Two failure classes, never mixed:
//! - A bound the deployment can never satisfy is a configuration error;
//!   it propagates unchanged to the caller of server selection
//! - A collaborator breaking the snapshot contract is fatal and must
//!   surface loudly, never as a silently wrong filtered set

use thiserror::Error;

/// Result type for selection operations
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Errors raised by the server-selection pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The requested staleness bound is tighter than the deployment's
    /// heartbeat cadence plus idle-write period allows.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An upstream stage handed this stage a snapshot that violates its
    /// contract. Indicates a bug, not user input.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl SelectionError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an invariant violation error.
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    /// Check if this error is fatal (contract violation rather than user
    /// misconfiguration).
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}
