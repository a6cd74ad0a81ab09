use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{
    SHORT_GAMES_PER_SET, STANDARD_GAMES_PER_SET, SUPER_TIEBREAK_POINTS, TIEBREAK_POINTS,
};
use super::errors::FormatError;

/// One of the two sides of a match. In doubles a side is a team.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Player1 => "player1",
            Self::Player2 => "player2",
        };
        write!(f, "{repr}")
    }
}

/// Tiebreak points as entered. Either side may still be blank while a
/// score is being typed in.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TiebreakPoints {
    pub player1: Option<u16>,
    pub player2: Option<u16>,
}

impl TiebreakPoints {
    #[must_use]
    pub const fn new(player1: u16, player2: u16) -> Self {
        Self {
            player1: Some(player1),
            player2: Some(player2),
        }
    }

    /// Both sides' points, if both were entered.
    #[must_use]
    pub const fn complete(&self) -> Option<(u16, u16)> {
        match (self.player1, self.player2) {
            (Some(p1), Some(p2)) => Some((p1, p2)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.player1.is_none() && self.player2.is_none()
    }

    #[must_use]
    pub const fn points(&self, side: Side) -> Option<u16> {
        match side {
            Side::Player1 => self.player1,
            Side::Player2 => self.player2,
        }
    }
}

/// Games won by each side in a single set, plus tiebreak points when the
/// set went to a tiebreak.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SetScore {
    pub player1_games: u8,
    pub player2_games: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak: Option<TiebreakPoints>,
}

impl SetScore {
    #[must_use]
    pub const fn new(player1_games: u8, player2_games: u8) -> Self {
        Self {
            player1_games,
            player2_games,
            tiebreak: None,
        }
    }

    #[must_use]
    pub const fn with_tiebreak(mut self, player1_points: u16, player2_points: u16) -> Self {
        self.tiebreak = Some(TiebreakPoints::new(player1_points, player2_points));
        self
    }

    #[must_use]
    pub const fn games(&self, side: Side) -> u8 {
        match side {
            Side::Player1 => self.player1_games,
            Side::Player2 => self.player2_games,
        }
    }

    /// True if any tiebreak point was entered for this set.
    #[must_use]
    pub const fn has_tiebreak_data(&self) -> bool {
        match self.tiebreak {
            Some(tiebreak) => !tiebreak.is_empty(),
            None => false,
        }
    }

    /// An untouched set slot: 0-0 with no tiebreak points.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.player1_games == 0 && self.player2_games == 0 && !self.has_tiebreak_data()
    }

    /// Whether the game counts call for a tiebreak under `format`.
    #[must_use]
    pub const fn is_tiebreak_score(&self, format: &MatchFormat) -> bool {
        let games = format.games_per_set.games();
        self.player1_games == games && self.player2_games == games
    }
}

/// Number of sets in a match.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BestOf {
    One,
    Three,
    Five,
}

impl BestOf {
    #[must_use]
    pub const fn sets_to_win(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Three => 2,
            Self::Five => 3,
        }
    }

    #[must_use]
    pub const fn max_sets(self) -> u8 {
        2 * self.sets_to_win() - 1
    }

    pub fn from_sets_to_win(sets_to_win: u8) -> Result<Self, FormatError> {
        match sets_to_win {
            1 => Ok(Self::One),
            2 => Ok(Self::Three),
            3 => Ok(Self::Five),
            other => Err(FormatError::BestOf(other.saturating_mul(2).saturating_sub(1))),
        }
    }
}

impl TryFrom<u8> for BestOf {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            3 => Ok(Self::Three),
            5 => Ok(Self::Five),
            other => Err(FormatError::BestOf(other)),
        }
    }
}

impl From<BestOf> for u8 {
    fn from(value: BestOf) -> Self {
        value.max_sets()
    }
}

/// Games needed to take a set.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GamesPerSet {
    Short,
    Standard,
}

impl GamesPerSet {
    #[must_use]
    pub const fn games(self) -> u8 {
        match self {
            Self::Short => SHORT_GAMES_PER_SET,
            Self::Standard => STANDARD_GAMES_PER_SET,
        }
    }
}

impl TryFrom<u8> for GamesPerSet {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            SHORT_GAMES_PER_SET => Ok(Self::Short),
            STANDARD_GAMES_PER_SET => Ok(Self::Standard),
            other => Err(FormatError::GamesPerSet(other)),
        }
    }
}

impl From<GamesPerSet> for u8 {
    fn from(value: GamesPerSet) -> Self {
        value.games()
    }
}

/// Points needed to win a tiebreak.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum TiebreakTarget {
    Seven,
    Ten,
}

impl TiebreakTarget {
    #[must_use]
    pub const fn points(self) -> u16 {
        match self {
            Self::Seven => TIEBREAK_POINTS,
            Self::Ten => SUPER_TIEBREAK_POINTS,
        }
    }
}

impl TryFrom<u16> for TiebreakTarget {
    type Error = FormatError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            TIEBREAK_POINTS => Ok(Self::Seven),
            SUPER_TIEBREAK_POINTS => Ok(Self::Ten),
            other => Err(FormatError::TiebreakTarget(other)),
        }
    }
}

impl From<TiebreakTarget> for u16 {
    fn from(value: TiebreakTarget) -> Self {
        value.points()
    }
}

/// Rules a match is played under. Fixed when the match is created.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MatchFormat {
    pub best_of: BestOf,
    pub games_per_set: GamesPerSet,
    /// Tiebreak target in the last possible set of the match.
    pub deciding_tiebreak: TiebreakTarget,
}

impl Default for MatchFormat {
    fn default() -> Self {
        Self::standard()
    }
}

impl MatchFormat {
    #[must_use]
    pub const fn new(
        best_of: BestOf,
        games_per_set: GamesPerSet,
        deciding_tiebreak: TiebreakTarget,
    ) -> Self {
        Self {
            best_of,
            games_per_set,
            deciding_tiebreak,
        }
    }

    /// Best of three six-game sets, third set decided by a super tiebreak.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(BestOf::Three, GamesPerSet::Standard, TiebreakTarget::Ten)
    }

    /// Best of three four-game sets, third set decided by a super tiebreak.
    #[must_use]
    pub const fn short_sets() -> Self {
        Self::new(BestOf::Three, GamesPerSet::Short, TiebreakTarget::Ten)
    }

    /// One six-game set with a regular tiebreak.
    #[must_use]
    pub const fn single_set() -> Self {
        Self::new(BestOf::One, GamesPerSet::Standard, TiebreakTarget::Seven)
    }

    /// Build a format from raw numbers as stored by callers:
    /// sets needed to win (1-3), games per set (4 or 6) and the
    /// deciding-set tiebreak target (7 or 10).
    pub fn from_parts(
        sets_to_win: u8,
        games_per_set: u8,
        deciding_tiebreak: u16,
    ) -> Result<Self, FormatError> {
        Ok(Self::new(
            BestOf::from_sets_to_win(sets_to_win)?,
            GamesPerSet::try_from(games_per_set)?,
            TiebreakTarget::try_from(deciding_tiebreak)?,
        ))
    }

    #[must_use]
    pub const fn sets_to_win(&self) -> u8 {
        self.best_of.sets_to_win()
    }

    #[must_use]
    pub const fn max_sets(&self) -> usize {
        self.best_of.max_sets() as usize
    }

    /// Whether `set_index` (zero-based) is the last set the format allows.
    #[must_use]
    pub const fn is_deciding_set(&self, set_index: usize) -> bool {
        set_index + 1 == self.max_sets()
    }

    /// Highest game count a side can legally reach in one set.
    #[must_use]
    pub const fn max_games(&self) -> u8 {
        self.games_per_set.games() + 1
    }
}

/// Where a match stands after resolving its score.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Incomplete,
    WinnerDetermined,
    Retired,
    Walkover,
}

impl MatchStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Incomplete)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Incomplete => "incomplete",
            Self::WinnerDetermined => "winner determined",
            Self::Retired => "retired",
            Self::Walkover => "walkover",
        };
        write!(f, "{repr}")
    }
}

/// Canonical outcome of a submitted score. Never mutated once built.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchResult {
    pub sets: Vec<SetScore>,
    pub winner: Option<Side>,
    pub final_score_label: String,
    pub status: MatchStatus,
    pub retired: bool,
    /// One-based index of the last set with any score when a side retired.
    pub retired_at_set_index: Option<usize>,
    pub walkover: bool,
    /// Format the score was resolved under, so sets can be re-evaluated
    /// later without extra context.
    pub format: MatchFormat,
}

impl MatchResult {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.retired || self.walkover
    }
}

/// Raw score input from a score-entry form, after the UI has parsed its
/// text fields into numbers.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScoreSubmission {
    #[serde(default)]
    pub sets: Vec<SetScore>,
    #[serde(default)]
    pub retired: bool,
    #[serde(default)]
    pub walkover: bool,
    #[serde(default)]
    pub manual_winner: Option<Side>,
}

impl ScoreSubmission {
    #[must_use]
    pub fn new(sets: Vec<SetScore>) -> Self {
        Self {
            sets,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn retired(mut self, winner: Option<Side>) -> Self {
        self.retired = true;
        self.manual_winner = winner;
        self
    }

    #[must_use]
    pub fn walkover(mut self, winner: Option<Side>) -> Self {
        self.walkover = true;
        self.manual_winner = winner;
        self
    }
}
