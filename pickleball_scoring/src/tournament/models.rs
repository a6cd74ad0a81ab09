//! Tournament data models: participants, bracket matches, pool matches and
//! standings rows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoring::{MatchResult, Side};

/// Match ID type
pub type MatchId = u64;

/// Identifier of a player or doubles team, as assigned by the caller.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    #[must_use]
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ParticipantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A player or team entered in an event
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Tournament seed (1 is the top seed)
    #[serde(default)]
    pub seed: Option<u32>,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Who sits in one side of a bracket match.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Waiting on the winner (or loser) of an earlier match
    #[default]
    Tbd,
    /// No opponent will ever fill this slot
    Bye,
    Occupied(ParticipantId),
}

impl Slot {
    #[must_use]
    pub fn participant(&self) -> Option<&ParticipantId> {
        match self {
            Self::Occupied(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_tbd(&self) -> bool {
        matches!(self, Self::Tbd)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tbd => write!(f, "TBD"),
            Self::Bye => write!(f, "bye"),
            Self::Occupied(id) => write!(f, "{id}"),
        }
    }
}

/// Scheduling status of a fixture
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

impl fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        };
        write!(f, "{repr}")
    }
}

/// One match in an elimination bracket.
///
/// `winner` and `result` are written once, when the match is advanced.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BracketMatch {
    pub id: MatchId,
    /// Round number (1-indexed)
    pub round: u32,
    pub player1: Slot,
    pub player2: Slot,
    pub winner: Option<ParticipantId>,
    pub result: Option<MatchResult>,
    /// Match the winner moves on to
    pub next_match_id: Option<MatchId>,
    /// Match the loser drops into (double elimination or consolation)
    #[serde(default)]
    pub loser_next_match_id: Option<MatchId>,
    pub status: FixtureStatus,
}

impl BracketMatch {
    #[must_use]
    pub fn new(id: MatchId, round: u32) -> Self {
        Self {
            id,
            round,
            player1: Slot::Tbd,
            player2: Slot::Tbd,
            winner: None,
            result: None,
            next_match_id: None,
            loser_next_match_id: None,
            status: FixtureStatus::Scheduled,
        }
    }

    #[must_use]
    pub fn with_slots(mut self, player1: Slot, player2: Slot) -> Self {
        self.player1 = player1;
        self.player2 = player2;
        self
    }

    #[must_use]
    pub fn with_next(mut self, next_match_id: MatchId) -> Self {
        self.next_match_id = Some(next_match_id);
        self
    }

    #[must_use]
    pub fn with_loser_next(mut self, loser_next_match_id: MatchId) -> Self {
        self.loser_next_match_id = Some(loser_next_match_id);
        self
    }

    #[must_use]
    pub const fn slot(&self, side: Side) -> &Slot {
        match side {
            Side::Player1 => &self.player1,
            Side::Player2 => &self.player2,
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == FixtureStatus::Completed
    }

    /// Both slots settled: occupied or bye, no TBD left.
    #[must_use]
    pub fn slots_resolved(&self) -> bool {
        !self.player1.is_tbd() && !self.player2.is_tbd()
    }

    /// A match at most one real participant will ever play.
    #[must_use]
    pub fn is_bye(&self) -> bool {
        self.slots_resolved() && (self.player1 == Slot::Bye || self.player2 == Slot::Bye)
    }
}

/// A round-robin or pool fixture between two known participants.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PoolMatch {
    pub id: MatchId,
    pub player1: ParticipantId,
    pub player2: ParticipantId,
    pub status: FixtureStatus,
    #[serde(default)]
    pub result: Option<MatchResult>,
}

impl PoolMatch {
    #[must_use]
    pub fn scheduled(id: MatchId, player1: ParticipantId, player2: ParticipantId) -> Self {
        Self {
            id,
            player1,
            player2,
            status: FixtureStatus::Scheduled,
            result: None,
        }
    }

    #[must_use]
    pub fn completed(
        id: MatchId,
        player1: ParticipantId,
        player2: ParticipantId,
        result: MatchResult,
    ) -> Self {
        Self {
            id,
            player1,
            player2,
            status: FixtureStatus::Completed,
            result: Some(result),
        }
    }
}

/// Anything that can feed the standings table.
pub trait RankableMatch {
    /// The two participants, in player1/player2 order, once both are known.
    fn sides(&self) -> Option<(&ParticipantId, &ParticipantId)>;
    fn is_completed(&self) -> bool;
    fn result(&self) -> Option<&MatchResult>;
}

impl RankableMatch for PoolMatch {
    fn sides(&self) -> Option<(&ParticipantId, &ParticipantId)> {
        Some((&self.player1, &self.player2))
    }

    fn is_completed(&self) -> bool {
        self.status == FixtureStatus::Completed
    }

    fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }
}

impl RankableMatch for BracketMatch {
    fn sides(&self) -> Option<(&ParticipantId, &ParticipantId)> {
        Some((self.player1.participant()?, self.player2.participant()?))
    }

    fn is_completed(&self) -> bool {
        BracketMatch::is_completed(self)
    }

    fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }
}

/// One line of a standings table. Derived on every request, never stored.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RankingRow {
    pub participant: Participant,
    pub wins: u32,
    pub losses: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub games_won: u32,
    pub games_lost: u32,
}

impl RankingRow {
    #[must_use]
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            wins: 0,
            losses: 0,
            sets_won: 0,
            sets_lost: 0,
            games_won: 0,
            games_lost: 0,
        }
    }

    #[must_use]
    pub fn set_difference(&self) -> i64 {
        i64::from(self.sets_won) - i64::from(self.sets_lost)
    }

    #[must_use]
    pub fn game_difference(&self) -> i64 {
        i64::from(self.games_won) - i64::from(self.games_lost)
    }

    #[must_use]
    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_id_from_str() {
        let id: ParticipantId = "alice".into();
        assert_eq!(id, ParticipantId::new("alice"));
        assert_eq!(id.to_string(), "alice");
    }

    #[test]
    fn test_slot_participant() {
        let slot = Slot::Occupied("bob".into());
        assert_eq!(slot.participant(), Some(&ParticipantId::new("bob")));
        assert_eq!(Slot::Bye.participant(), None);
        assert!(Slot::Tbd.is_tbd());
    }

    #[test]
    fn test_bye_detection() {
        let m = BracketMatch::new(1, 1).with_slots(Slot::Occupied("a".into()), Slot::Bye);
        assert!(m.is_bye());

        let m = BracketMatch::new(2, 2).with_slots(Slot::Tbd, Slot::Bye);
        assert!(!m.is_bye());

        let m = BracketMatch::new(3, 1)
            .with_slots(Slot::Occupied("a".into()), Slot::Occupied("b".into()));
        assert!(!m.is_bye());
        assert!(m.slots_resolved());
    }

    #[test]
    fn test_bracket_match_sides_need_both_participants() {
        let m = BracketMatch::new(1, 2).with_slots(Slot::Occupied("a".into()), Slot::Tbd);
        assert_eq!(RankableMatch::sides(&m), None);
    }

    #[test]
    fn test_ranking_row_differences() {
        let mut row = RankingRow::new(Participant::new("a", "Alice"));
        row.wins = 2;
        row.losses = 1;
        row.sets_won = 4;
        row.sets_lost = 3;
        row.games_won = 30;
        row.games_lost = 34;
        assert_eq!(row.set_difference(), 1);
        assert_eq!(row.game_difference(), -4);
        assert_eq!(row.matches_played(), 3);
    }

    #[test]
    fn test_fixture_status_json() {
        let json = serde_json::to_string(&FixtureStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
