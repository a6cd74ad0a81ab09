//! Match resolver: turns a score into a terminal (or still open) match
//! result with its canonical final-score label.
//!
//! Status moves from `Incomplete` to exactly one of `WinnerDetermined`,
//! `Retired` or `Walkover`. Resolution is a pure function of its inputs.

use log::debug;

use super::constants::{RETIRED_LABEL, WALKOVER_LABEL};
use super::entities::{MatchFormat, MatchResult, MatchStatus, ScoreSubmission, SetScore, Side};
use super::errors::{ScoringError, ScoringResult};
use super::set_evaluator::{deciding_set, evaluate_set};
use super::validator::{trim_blank_sets, validate_submission};

/// Resolve a score into a [`MatchResult`].
///
/// Retirement and walkover end the match whatever the score says, so the
/// winner has to be given in `manual_winner`. Otherwise the winner is the
/// first side to take `format.sets_to_win()` sets and any sets after that
/// point are dropped.
pub fn resolve(
    sets: &[SetScore],
    format: &MatchFormat,
    retired: bool,
    walkover: bool,
    manual_winner: Option<Side>,
) -> ScoringResult<MatchResult> {
    let sets = trim_blank_sets(sets);

    if walkover {
        let winner = manual_winner.ok_or(ScoringError::WinnerRequired)?;
        debug!("Match awarded to {winner} by walkover");
        return Ok(MatchResult {
            sets: Vec::new(),
            winner: Some(winner),
            final_score_label: WALKOVER_LABEL.to_string(),
            status: MatchStatus::Walkover,
            retired: false,
            retired_at_set_index: None,
            walkover: true,
            format: *format,
        });
    }

    if retired {
        let winner = manual_winner.ok_or(ScoringError::WinnerRequired)?;
        let retired_at_set_index = sets.iter().rposition(|set| !set.is_blank()).map(|idx| idx + 1);
        debug!("Match awarded to {winner} by retirement during set {retired_at_set_index:?}");
        return Ok(MatchResult {
            sets: sets.to_vec(),
            winner: Some(winner),
            final_score_label: RETIRED_LABEL.to_string(),
            status: MatchStatus::Retired,
            retired: true,
            retired_at_set_index,
            walkover: false,
            format: *format,
        });
    }

    match deciding_set(sets, format) {
        Some((decided_idx, winner)) => {
            if let Some(selected) = manual_winner
                && selected != winner
            {
                return Err(ScoringError::WinnerMismatch {
                    selected,
                    decided: winner,
                });
            }

            let played = &sets[..=decided_idx];
            debug!("Match won by {winner} in set {}", decided_idx + 1);
            Ok(MatchResult {
                sets: played.to_vec(),
                winner: Some(winner),
                final_score_label: score_label(played, format),
                status: MatchStatus::WinnerDetermined,
                retired: false,
                retired_at_set_index: None,
                walkover: false,
                format: *format,
            })
        }
        None => {
            if let Some(selected) = manual_winner {
                debug!("Ignoring selected winner {selected} for a match still in progress");
            }
            Ok(MatchResult {
                sets: sets.to_vec(),
                winner: None,
                final_score_label: score_label(sets, format),
                status: MatchStatus::Incomplete,
                retired: false,
                retired_at_set_index: None,
                walkover: false,
                format: *format,
            })
        }
    }
}

/// Validate a form submission and resolve it in one step.
pub fn score_match(submission: &ScoreSubmission, format: &MatchFormat) -> ScoringResult<MatchResult> {
    let report = validate_submission(submission, format);
    if !report.is_valid() {
        return Err(ScoringError::InvalidScore(report));
    }

    resolve(
        &submission.sets,
        format,
        submission.retired,
        submission.walkover,
        submission.manual_winner,
    )
}

/// Comma-joined per-set score, e.g. `6-4, 7-6(7)` or `6-4, 4-6, 6-6(10-8)`.
#[must_use]
pub fn score_label(sets: &[SetScore], format: &MatchFormat) -> String {
    sets.iter()
        .enumerate()
        .map(|(idx, set)| set_label(set, idx, format))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A regular-set tiebreak credits the winner with the extra game and shows
/// only their points. The deciding set, or a tiebreak still being played,
/// shows both sides' points.
fn set_label(set: &SetScore, set_index: usize, format: &MatchFormat) -> String {
    let (p1, p2) = (set.player1_games, set.player2_games);

    let Some((tb1, tb2)) = set.tiebreak.and_then(|tiebreak| tiebreak.complete()) else {
        return format!("{p1}-{p2}");
    };

    match evaluate_set(set, set_index, format) {
        Some(winner) if !format.is_deciding_set(set_index) => {
            let winner_points = if winner == Side::Player1 { tb1 } else { tb2 };
            let (g1, g2) = match winner {
                Side::Player1 => (p1 + 1, p2),
                Side::Player2 => (p1, p2 + 1),
            };
            format!("{g1}-{g2}({winner_points})")
        }
        _ => format!("{p1}-{p2}({tb1}-{tb2})"),
    }
}
