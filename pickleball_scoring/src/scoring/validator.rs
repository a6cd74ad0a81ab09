//! Score validator: checks a whole sequence of set scores before it is
//! resolved, collecting every violation rather than stopping at the first.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::WIN_MARGIN;
use super::entities::{MatchFormat, ScoreSubmission, SetScore};
use super::set_evaluator::{deciding_set, evaluate_set, tiebreak_target};

/// A single broken scoring rule. Set numbers are one-based.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum ScoreViolation {
    #[error("set {set}: game counts {player1}-{player2} must be between 0 and {max}")]
    GamesOutOfRange {
        set: usize,
        player1: u8,
        player2: u8,
        max: u8,
    },
    #[error("set {set}: {player1}-{player2} can't be reached, {games}-{games} goes to a tiebreak")]
    ImpossibleGames {
        set: usize,
        player1: u8,
        player2: u8,
        games: u8,
    },
    #[error("set {set}: tiebreak points are required at {games}-{games}")]
    MissingTiebreak { set: usize, games: u8 },
    #[error("set {set}: tiebreak points must be entered for both sides")]
    PartialTiebreak { set: usize },
    #[error("set {set}: tiebreak {player1}-{player2} would have ended earlier")]
    ImpossibleTiebreak {
        set: usize,
        player1: u16,
        player2: u16,
    },
    #[error("set {set}: tiebreak points are only allowed at {games}-{games}")]
    UnexpectedTiebreak { set: usize, games: u8 },
    #[error("set {set}: the match was already decided in set {decided_in}")]
    PhantomSet { set: usize, decided_in: usize },
    #[error("set {set} is unfinished but a later set has a score")]
    UnfinishedSet { set: usize },
    #[error("{count} sets entered but at most {max} can be played")]
    TooManySets { count: usize, max: usize },
}

/// Outcome of validating a score. Empty means valid.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ScoreViolation>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// One human-readable line per violation, in the order found.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Sets up to and including the last one carrying any data. Untouched
/// trailing slots from a fixed-size form are not part of the score.
#[must_use]
pub fn trim_blank_sets(sets: &[SetScore]) -> &[SetScore] {
    let len = sets
        .iter()
        .rposition(|set| !set.is_blank())
        .map_or(0, |idx| idx + 1);
    &sets[..len]
}

/// Check `sets` against the rules of `format`.
#[must_use]
pub fn validate(sets: &[SetScore], format: &MatchFormat) -> ValidationReport {
    let sets = trim_blank_sets(sets);
    let mut errors = Vec::new();

    for (idx, set) in sets.iter().enumerate() {
        check_set(idx, set, format, &mut errors);
    }

    let last_counted = match deciding_set(sets, format) {
        Some((decided_idx, _)) => {
            for (idx, set) in sets.iter().enumerate().skip(decided_idx + 1) {
                if !set.is_blank() {
                    errors.push(ScoreViolation::PhantomSet {
                        set: idx + 1,
                        decided_in: decided_idx + 1,
                    });
                }
            }
            decided_idx
        }
        None => {
            if sets.len() > format.max_sets() {
                errors.push(ScoreViolation::TooManySets {
                    count: sets.len(),
                    max: format.max_sets(),
                });
            }
            sets.len().saturating_sub(1)
        }
    };

    // Every set before the last counted one must have been finished.
    for (idx, set) in sets.iter().enumerate().take(last_counted) {
        if evaluate_set(set, idx, format).is_none() {
            errors.push(ScoreViolation::UnfinishedSet { set: idx + 1 });
        }
    }

    ValidationReport { errors }
}

/// Validate a form submission. A walkover had no play, so nothing is
/// checked.
#[must_use]
pub fn validate_submission(submission: &ScoreSubmission, format: &MatchFormat) -> ValidationReport {
    if submission.walkover {
        debug!("Skipping score validation for walkover");
        return ValidationReport::default();
    }
    validate(&submission.sets, format)
}

fn check_set(idx: usize, set: &SetScore, format: &MatchFormat, errors: &mut Vec<ScoreViolation>) {
    let number = idx + 1;
    let max = format.max_games();
    let games = format.games_per_set.games();

    if set.player1_games > max || set.player2_games > max {
        errors.push(ScoreViolation::GamesOutOfRange {
            set: number,
            player1: set.player1_games,
            player2: set.player2_games,
            max,
        });
    } else if (set.player1_games == max && set.player2_games != games - 1)
        || (set.player2_games == max && set.player1_games != games - 1)
    {
        // The extra game only exists after games-1 all was broken.
        errors.push(ScoreViolation::ImpossibleGames {
            set: number,
            player1: set.player1_games,
            player2: set.player2_games,
            games,
        });
    }

    let tiebreak = set.tiebreak.unwrap_or_default();
    if set.is_tiebreak_score(format) {
        match tiebreak.complete() {
            None if tiebreak.is_empty() => {
                errors.push(ScoreViolation::MissingTiebreak { set: number, games });
            }
            None => errors.push(ScoreViolation::PartialTiebreak { set: number }),
            Some((p1, p2)) => {
                // Past the target a tiebreak ends as soon as the lead is two.
                let (high, low) = (p1.max(p2), p1.min(p2));
                if high > tiebreak_target(idx, format) && high - low > WIN_MARGIN {
                    errors.push(ScoreViolation::ImpossibleTiebreak {
                        set: number,
                        player1: p1,
                        player2: p2,
                    });
                }
            }
        }
    } else if !tiebreak.is_empty() {
        errors.push(ScoreViolation::UnexpectedTiebreak { set: number, games });
    }
}
