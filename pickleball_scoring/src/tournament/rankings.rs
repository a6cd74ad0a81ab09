//! Standings for round-robin and pool play.
//!
//! The table is rebuilt from the full match list on every call, so it can't
//! drift from the matches it summarises.

use log::warn;
use std::collections::HashMap;

use super::models::{Participant, ParticipantId, RankableMatch, RankingRow};
use crate::scoring::{MatchResult, Side, evaluate_set};

/// Build the standings table for `participants` from `matches`.
///
/// Only completed matches count. Rows are ordered by wins, then set
/// difference, then game difference, all descending; rows that tie on all
/// three keep the order `participants` was given in.
#[must_use]
pub fn compute_rankings<M: RankableMatch>(
    participants: &[Participant],
    matches: &[M],
) -> Vec<RankingRow> {
    let mut rows: Vec<RankingRow> = participants.iter().cloned().map(RankingRow::new).collect();
    let index: HashMap<&ParticipantId, usize> = participants
        .iter()
        .enumerate()
        .map(|(idx, p)| (&p.id, idx))
        .collect();

    for m in matches.iter().filter(|m| m.is_completed()) {
        // A completed bye has no result and nothing to count.
        let (Some((p1, p2)), Some(result)) = (m.sides(), m.result()) else {
            continue;
        };
        if p1 == p2 {
            warn!("Skipping match {p1} against themselves");
            continue;
        }
        let (Some(&i1), Some(&i2)) = (index.get(p1), index.get(p2)) else {
            warn!("Skipping match between {p1} and {p2}: not in the participant list");
            continue;
        };
        let Some(winner) = result.winner else {
            warn!("Skipping completed match between {p1} and {p2} with no winner");
            continue;
        };

        let (winner_idx, loser_idx) = match winner {
            Side::Player1 => (i1, i2),
            Side::Player2 => (i2, i1),
        };
        rows[winner_idx].wins += 1;
        rows[loser_idx].losses += 1;

        let tally = tally_sets(result);
        add_tally(&mut rows[i1], &tally, Side::Player1);
        add_tally(&mut rows[i2], &tally, Side::Player2);
    }

    rows.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.set_difference().cmp(&a.set_difference()))
            .then_with(|| b.game_difference().cmp(&a.game_difference()))
    });
    rows
}

/// Sets and games taken by each side, player1 first.
#[derive(Debug, Default, PartialEq)]
struct SetTally {
    sets: [u32; 2],
    games: [u32; 2],
}

/// Only sets with a winner count as sets; games from an unfinished set
/// (a retirement) still count. The tiebreak winner is credited the extra
/// game, so 6-6 won in a tiebreak tallies as 7-6.
fn tally_sets(result: &MatchResult) -> SetTally {
    let mut tally = SetTally::default();

    for (idx, set) in result.sets.iter().enumerate() {
        tally.games[0] += u32::from(set.player1_games);
        tally.games[1] += u32::from(set.player2_games);

        if let Some(side) = evaluate_set(set, idx, &result.format) {
            let slot = side_index(side);
            tally.sets[slot] += 1;
            if set.is_tiebreak_score(&result.format) {
                tally.games[slot] += 1;
            }
        }
    }

    tally
}

fn add_tally(row: &mut RankingRow, tally: &SetTally, side: Side) {
    let (own, other) = (side_index(side), side_index(side.opponent()));
    row.sets_won += tally.sets[own];
    row.sets_lost += tally.sets[other];
    row.games_won += tally.games[own];
    row.games_lost += tally.games[other];
}

const fn side_index(side: Side) -> usize {
    match side {
        Side::Player1 => 0,
        Side::Player2 => 1,
    }
}
