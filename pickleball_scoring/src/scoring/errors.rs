//! Scoring error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::Side;
use super::validator::ValidationReport;

/// Errors raised while turning raw set scores into a match result.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum ScoringError {
    /// One or more set scores broke the scoring rules. Every violation
    /// found is carried, not just the first.
    #[error("invalid score: {}", .0.messages().join("; "))]
    InvalidScore(ValidationReport),

    /// Retirement and walkover can't imply a winner from the score.
    #[error("a winner must be selected for a retired or walkover match")]
    WinnerRequired,

    #[error("selected winner {selected} contradicts the score, which was won by {decided}")]
    WinnerMismatch { selected: Side, decided: Side },
}

/// Result type for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Rejected match format values.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum FormatError {
    #[error("best of {0} is not supported (expected 1, 3 or 5)")]
    BestOf(u8),

    #[error("{0} games per set is not supported (expected 4 or 6)")]
    GamesPerSet(u8),

    #[error("tiebreak to {0} is not supported (expected 7 or 10)")]
    TiebreakTarget(u16),
}
