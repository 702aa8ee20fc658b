//! Error types for evaluation operations.

use thiserror::Error;

/// Errors that can occur when parsing a rank name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseRankError {
    /// The string is not a canonical rank name.
    #[error("unknown rank name")]
    UnknownRank,
}

/// Errors that can occur when evaluating a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The dealer key has no hand in the round.
    #[error("dealer hand not found in round")]
    DealerMissing,
}
