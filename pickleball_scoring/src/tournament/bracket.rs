//! Bracket progression: recording results, moving winners (and losers, for
//! consolation paths) into later matches, byes, and round status.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use super::errors::{BracketError, BracketResult};
use super::models::{BracketMatch, FixtureStatus, MatchId, Participant, ParticipantId, Slot};
use crate::scoring::{MatchResult, Side};

/// An entrant to place into a slot of a later match.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SlotUpdate {
    pub match_id: MatchId,
    pub entrant: Slot,
}

/// Everything that changes when a match finishes.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Advancement {
    pub updated_match: BracketMatch,
    pub winner_slot_update: Option<SlotUpdate>,
    pub loser_slot_update: Option<SlotUpdate>,
}

/// Write `result` onto `bracket_match` and work out where its winner and
/// loser go next.
///
/// # Errors
///
/// - `AlreadyCompleted` if the match already has a result
/// - `ResultNotDecided` if the result has no winner
/// - `SlotNotOccupied` if either side has no participant
pub fn advance(bracket_match: &BracketMatch, result: &MatchResult) -> BracketResult<Advancement> {
    if bracket_match.is_completed() {
        return Err(BracketError::AlreadyCompleted(bracket_match.id));
    }

    let side = result
        .winner
        .ok_or(BracketError::ResultNotDecided(bracket_match.id))?;
    let winner = occupant(bracket_match, side)?;
    let loser = occupant(bracket_match, side.opponent())?;

    debug!(
        "Match {} won by {winner} ({})",
        bracket_match.id, result.final_score_label
    );

    let mut updated_match = bracket_match.clone();
    updated_match.winner = Some(winner.clone());
    updated_match.result = Some(result.clone());
    updated_match.status = FixtureStatus::Completed;

    Ok(Advancement {
        winner_slot_update: bracket_match.next_match_id.map(|match_id| SlotUpdate {
            match_id,
            entrant: Slot::Occupied(winner),
        }),
        loser_slot_update: bracket_match.loser_next_match_id.map(|match_id| SlotUpdate {
            match_id,
            entrant: Slot::Occupied(loser),
        }),
        updated_match,
    })
}

fn occupant(bracket_match: &BracketMatch, side: Side) -> BracketResult<ParticipantId> {
    bracket_match
        .slot(side)
        .participant()
        .cloned()
        .ok_or(BracketError::SlotNotOccupied {
            match_id: bracket_match.id,
            side,
        })
}

/// Complete a bye without a result: the lone participant moves on. A
/// double bye completes with no winner and passes a bye along.
pub fn auto_advance_bye(bracket_match: &BracketMatch) -> BracketResult<Advancement> {
    if bracket_match.is_completed() {
        return Err(BracketError::AlreadyCompleted(bracket_match.id));
    }

    let winner = match (&bracket_match.player1, &bracket_match.player2) {
        (Slot::Occupied(id), Slot::Bye) | (Slot::Bye, Slot::Occupied(id)) => Some(id.clone()),
        (Slot::Bye, Slot::Bye) => None,
        _ => return Err(BracketError::NotABye(bracket_match.id)),
    };

    debug!("Match {} is a bye, advancing {winner:?}", bracket_match.id);

    let mut updated_match = bracket_match.clone();
    updated_match.winner = winner.clone();
    updated_match.status = FixtureStatus::Completed;

    let entrant = winner.map_or(Slot::Bye, Slot::Occupied);
    Ok(Advancement {
        winner_slot_update: bracket_match
            .next_match_id
            .map(|match_id| SlotUpdate { match_id, entrant }),
        loser_slot_update: bracket_match.loser_next_match_id.map(|match_id| SlotUpdate {
            match_id,
            entrant: Slot::Bye,
        }),
        updated_match,
    })
}

/// Place `update.entrant` into the first TBD slot of `next_match`.
///
/// Placing a participant who is already in the match changes nothing.
///
/// # Errors
///
/// - `UnknownMatch` if `update` targets a different match
/// - `AlreadyCompleted` if `next_match` is already finished
/// - `SlotConflict` if both slots are held by someone else
pub fn apply_slot_update(
    next_match: &BracketMatch,
    update: &SlotUpdate,
) -> BracketResult<BracketMatch> {
    if next_match.id != update.match_id {
        return Err(BracketError::UnknownMatch(update.match_id));
    }
    if next_match.is_completed() {
        return Err(BracketError::AlreadyCompleted(next_match.id));
    }

    if let Slot::Occupied(_) = update.entrant
        && (next_match.player1 == update.entrant || next_match.player2 == update.entrant)
    {
        return Ok(next_match.clone());
    }

    let mut updated = next_match.clone();
    if updated.player1.is_tbd() {
        updated.player1 = update.entrant.clone();
    } else if updated.player2.is_tbd() {
        updated.player2 = update.entrant.clone();
    } else {
        return Err(BracketError::SlotConflict {
            match_id: next_match.id,
            entrant: update.entrant.clone(),
        });
    }
    Ok(updated)
}

/// A round is active if any of its matches is being played, or is
/// scheduled with both slots settled.
#[must_use]
pub fn is_round_active(matches: &[BracketMatch], round: u32) -> bool {
    matches
        .iter()
        .filter(|m| m.round == round)
        .any(|m| match m.status {
            FixtureStatus::InProgress => true,
            FixtureStatus::Scheduled => m.slots_resolved(),
            FixtureStatus::Completed => false,
        })
}

/// Every match of the round has finished.
#[must_use]
pub fn is_round_resolved(matches: &[BracketMatch], round: u32) -> bool {
    let mut in_round = matches.iter().filter(|m| m.round == round).peekable();
    in_round.peek().is_some() && in_round.all(BracketMatch::is_completed)
}

/// Earliest active round, if any.
#[must_use]
pub fn current_round(matches: &[BracketMatch]) -> Option<u32> {
    rounds(matches)
        .into_iter()
        .find(|&round| is_round_active(matches, round))
}

/// Distinct round numbers, ascending.
#[must_use]
pub fn rounds(matches: &[BracketMatch]) -> Vec<u32> {
    matches
        .iter()
        .map(|m| m.round)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Bracket generation options
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct BracketOptions {
    /// Play off the semifinal losers for third place
    pub third_place_match: bool,
}

/// An elimination bracket: the full set of matches and the links between
/// them.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Bracket {
    matches: Vec<BracketMatch>,
}

impl Bracket {
    /// Wrap matches loaded by the caller.
    #[must_use]
    pub fn from_matches(matches: Vec<BracketMatch>) -> Self {
        Self { matches }
    }

    /// Generate a seeded single-elimination bracket.
    ///
    /// Seeded participants are placed by seed, unseeded ones follow in the
    /// order given. The field is padded to a power of two with byes, which
    /// go to the top seeds and are advanced straight away.
    pub fn single_elimination(
        participants: &[Participant],
        options: BracketOptions,
    ) -> BracketResult<Self> {
        let count = participants.len();
        if count < 2 {
            return Err(BracketError::NotEnoughParticipants(count));
        }

        let mut seen = HashSet::with_capacity(count);
        for participant in participants {
            if !seen.insert(&participant.id) {
                return Err(BracketError::DuplicateParticipant(participant.id.clone()));
            }
        }

        let mut ordered: Vec<&Participant> = participants.iter().collect();
        ordered.sort_by_key(|p| p.seed.unwrap_or(u32::MAX));

        let size = count.next_power_of_two();
        let total_rounds = size.trailing_zeros();
        let slot_for = |seed: usize| {
            ordered
                .get(seed - 1)
                .map_or(Slot::Bye, |p| Slot::Occupied(p.id.clone()))
        };

        let mut matches = Vec::with_capacity(size);
        let mut round_start: MatchId = 1;
        for round in 1..=total_rounds {
            let in_round = (size >> round) as MatchId;
            let next_round_start = round_start + in_round;
            for k in 0..in_round {
                let mut m = BracketMatch::new(round_start + k, round);
                if round < total_rounds {
                    m = m.with_next(next_round_start + k / 2);
                }
                matches.push(m);
            }
            round_start = next_round_start;
        }

        let positions = seeding_order(size);
        for (m, pair) in matches.iter_mut().zip(positions.chunks_exact(2)) {
            m.player1 = slot_for(pair[0]);
            m.player2 = slot_for(pair[1]);
        }

        if options.third_place_match && total_rounds >= 2 {
            let third_place_id = round_start;
            for m in matches.iter_mut().filter(|m| m.round == total_rounds - 1) {
                m.loser_next_match_id = Some(third_place_id);
            }
            matches.push(BracketMatch::new(third_place_id, total_rounds));
        }

        info!("Generated bracket: {count} participants, {total_rounds} rounds");

        let mut bracket = Self { matches };
        bracket.resolve_byes()?;
        Ok(bracket)
    }

    #[must_use]
    pub fn matches(&self) -> &[BracketMatch] {
        &self.matches
    }

    #[must_use]
    pub fn get(&self, id: MatchId) -> Option<&BracketMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn round(&self, round: u32) -> impl Iterator<Item = &BracketMatch> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    #[must_use]
    pub fn current_round(&self) -> Option<u32> {
        current_round(&self.matches)
    }

    /// Mark a match as being played.
    pub fn start_match(&mut self, id: MatchId) -> BracketResult<()> {
        let idx = self.index_of(id)?;
        let m = &mut self.matches[idx];
        if m.is_completed() {
            return Err(BracketError::AlreadyCompleted(id));
        }
        m.status = FixtureStatus::InProgress;
        Ok(())
    }

    /// Record a finished match and move its participants on. Nothing is
    /// written unless every step succeeds.
    pub fn record_result(&mut self, id: MatchId, result: &MatchResult) -> BracketResult<()> {
        let idx = self.index_of(id)?;
        let advancement = advance(&self.matches[idx], result)?;

        // Byes opened up by this result cascade on a copy first.
        let mut staged = self.clone();
        staged.commit(advancement)?;
        staged.resolve_byes()?;
        *self = staged;
        Ok(())
    }

    /// Advance every pending bye, including byes created by earlier ones.
    /// Returns how many matches were completed.
    pub fn resolve_byes(&mut self) -> BracketResult<usize> {
        let mut advanced = 0;
        while let Some(idx) = self
            .matches
            .iter()
            .position(|m| !m.is_completed() && m.is_bye())
        {
            let advancement = auto_advance_bye(&self.matches[idx])?;
            self.commit(advancement)?;
            advanced += 1;
        }
        Ok(advanced)
    }

    /// Winner of the final, once it has been played.
    ///
    /// The final is the first match of the last round; a third-place match
    /// shares that round but is generated after it.
    #[must_use]
    pub fn champion(&self) -> Option<&ParticipantId> {
        let last_round = self.matches.iter().map(|m| m.round).max()?;
        self.matches
            .iter()
            .filter(|m| m.round == last_round)
            .min_by_key(|m| m.id)?
            .winner
            .as_ref()
    }

    fn index_of(&self, id: MatchId) -> BracketResult<usize> {
        self.matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(BracketError::UnknownMatch(id))
    }

    fn commit(&mut self, advancement: Advancement) -> BracketResult<()> {
        let mut staged: Vec<(usize, BracketMatch)> = Vec::with_capacity(3);
        staged.push((
            self.index_of(advancement.updated_match.id)?,
            advancement.updated_match,
        ));

        for update in [advancement.winner_slot_update, advancement.loser_slot_update]
            .into_iter()
            .flatten()
        {
            let target = self.index_of(update.match_id)?;
            let current = staged
                .iter()
                .find(|(idx, _)| *idx == target)
                .map_or(&self.matches[target], |(_, m)| m);
            let updated = apply_slot_update(current, &update)?;
            staged.retain(|(idx, _)| *idx != target);
            staged.push((target, updated));
        }

        for (idx, m) in staged {
            self.matches[idx] = m;
        }
        Ok(())
    }
}

/// Standard bracket order of seeds for a power-of-two field, e.g.
/// `[1, 8, 4, 5, 2, 7, 3, 6]` for eight. Adjacent pairs meet in round one.
fn seeding_order(size: usize) -> Vec<usize> {
    let mut order = vec![1];
    while order.len() < size {
        let sum = order.len() * 2 + 1;
        order = order.iter().flat_map(|&seed| [seed, sum - seed]).collect();
    }
    order
}
