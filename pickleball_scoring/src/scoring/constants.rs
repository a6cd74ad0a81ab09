//! Scoring thresholds and canonical labels.

/// Games needed to take a set in the standard format.
pub const STANDARD_GAMES_PER_SET: u8 = 6;

/// Games needed to take a set in the short-set format.
pub const SHORT_GAMES_PER_SET: u8 = 4;

/// Points needed to win a regular tiebreak.
pub const TIEBREAK_POINTS: u16 = 7;

/// Points needed to win a deciding "super" tiebreak.
pub const SUPER_TIEBREAK_POINTS: u16 = 10;

/// Minimum margin for games in a set and for points in a tiebreak.
pub const WIN_MARGIN: u16 = 2;

/// Final-score label for a match ended by retirement.
pub const RETIRED_LABEL: &str = "RET";

/// Final-score label for a match awarded without play.
pub const WALKOVER_LABEL: &str = "W.O.";
