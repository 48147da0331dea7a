//! Error types for the quorum workspace facade.

use thiserror::Error;

/// Workspace-level error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuorumError {
    /// Round state validation failed.
    #[error("round state error: {0}")]
    State(#[from] quorum_policy::StateError),
}
