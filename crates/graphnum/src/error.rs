//! Error taxonomy shared by every entry point.
//!
//! All variants come from precondition checks; nothing here is transient.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed size, width or range arguments.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    /// Requested more distinct integers than the interval holds.
    #[error("sample size {count} exceeds size of candidate pool ({pool})")]
    SampleTooLarge { count: u64, pool: u128 },
    /// Bipartite structure required but neither a type vector nor a `type`
    /// vertex attribute was available.
    #[error("not a bipartite graph, supply vertex types")]
    MissingVertexTypes,
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
