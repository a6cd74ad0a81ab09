//! Bracket error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{MatchId, ParticipantId, Slot};
use crate::scoring::Side;

/// Bracket progression errors. These are reported, never resolved
/// silently: serialising concurrent writers is the caller's job.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum BracketError {
    #[error("match {0} is already completed")]
    AlreadyCompleted(MatchId),

    #[error("both slots of match {match_id} are already filled, can't place {entrant}")]
    SlotConflict { match_id: MatchId, entrant: Slot },

    #[error("result for match {0} has no winner")]
    ResultNotDecided(MatchId),

    #[error("match {match_id} has no participant on the {side} side")]
    SlotNotOccupied { match_id: MatchId, side: Side },

    #[error("match {0} is not a bye")]
    NotABye(MatchId),

    #[error("match not found: {0}")]
    UnknownMatch(MatchId),

    #[error("a bracket needs at least 2 participants, got {0}")]
    NotEnoughParticipants(usize),

    #[error("participant {0} entered more than once")]
    DuplicateParticipant(ParticipantId),
}

/// Result type for bracket operations
pub type BracketResult<T> = Result<T, BracketError>;
