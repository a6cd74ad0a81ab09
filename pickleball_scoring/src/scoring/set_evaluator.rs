//! Set evaluator: decides whether a single set is over and who took it.
//!
//! Inputs are assumed to be bounded already (no game count above
//! `games_per_set + 1`); range checking belongs to the validator.

use super::constants::{TIEBREAK_POINTS, WIN_MARGIN};
use super::entities::{MatchFormat, SetScore, Side};

/// Tiebreak points needed in the set at `set_index` (zero-based).
///
/// The last possible set of the format uses the format's deciding
/// tiebreak target; every other set plays a regular tiebreak to 7.
#[must_use]
pub const fn tiebreak_target(set_index: usize, format: &MatchFormat) -> u16 {
    if format.is_deciding_set(set_index) {
        format.deciding_tiebreak.points()
    } else {
        TIEBREAK_POINTS
    }
}

/// Winner of the set at `set_index`, or `None` if the set is still open.
///
/// A side takes the set by reaching `games_per_set` games two clear of the
/// opponent (7-5 in a six-game set is the extra-game case). At
/// `games_per_set` all, the set is settled by tiebreak points: the target
/// from [`tiebreak_target`] with a two-point margin. There is no cap on
/// tiebreak points, and a tiebreak with either side blank is still open.
#[must_use]
pub fn evaluate_set(score: &SetScore, set_index: usize, format: &MatchFormat) -> Option<Side> {
    if score.is_blank() {
        return None;
    }

    if score.is_tiebreak_score(format) {
        let (p1, p2) = score.tiebreak?.complete()?;
        return points_winner(p1, p2, tiebreak_target(set_index, format));
    }

    let games = u16::from(format.games_per_set.games());
    points_winner(
        u16::from(score.player1_games),
        u16::from(score.player2_games),
        games,
    )
}

/// Whoever is at or past `target` with a two-point lead. Points are
/// unbounded, so the lead is taken by subtraction.
fn points_winner(p1: u16, p2: u16, target: u16) -> Option<Side> {
    if p1 >= target && p1.saturating_sub(p2) >= WIN_MARGIN {
        Some(Side::Player1)
    } else if p2 >= target && p2.saturating_sub(p1) >= WIN_MARGIN {
        Some(Side::Player2)
    } else {
        None
    }
}

/// Zero-based index of the set in which one side reached the sets needed
/// to win, with that side. Sets after it are never counted.
#[must_use]
pub fn deciding_set(sets: &[SetScore], format: &MatchFormat) -> Option<(usize, Side)> {
    let needed = format.sets_to_win();
    let (mut p1_sets, mut p2_sets) = (0u8, 0u8);

    for (idx, set) in sets.iter().enumerate() {
        match evaluate_set(set, idx, format) {
            Some(Side::Player1) => p1_sets += 1,
            Some(Side::Player2) => p2_sets += 1,
            None => continue,
        }

        if p1_sets >= needed {
            return Some((idx, Side::Player1));
        }
        if p2_sets >= needed {
            return Some((idx, Side::Player2));
        }
    }

    None
}
