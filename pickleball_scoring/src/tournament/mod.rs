//! Tournament module for elimination brackets and round-robin standings.
//!
//! This module provides:
//! - Bracket generation with seeding and byes
//! - Recording results and advancing winners (and losers into consolation
//!   matches)
//! - Round status for display layers
//! - Standings tables with win / set difference / game difference ordering
//!
//! ## Example
//!
//! ```
//! use pickleball_scoring::scoring::{MatchFormat, SetScore, resolve};
//! use pickleball_scoring::tournament::{Bracket, BracketOptions, Participant};
//!
//! let entrants = vec![
//!     Participant::new("ana", "Ana").with_seed(1),
//!     Participant::new("ben", "Ben").with_seed(2),
//! ];
//! let mut bracket = Bracket::single_elimination(&entrants, BracketOptions::default()).unwrap();
//!
//! let sets = [SetScore::new(6, 4), SetScore::new(6, 2)];
//! let result = resolve(&sets, &MatchFormat::standard(), false, false, None).unwrap();
//! bracket.record_result(1, &result).unwrap();
//!
//! assert_eq!(bracket.champion().map(|id| id.as_str()), Some("ana"));
//! ```

pub mod bracket;
pub mod errors;
pub mod models;
pub mod rankings;

pub use bracket::{
    Advancement, Bracket, BracketOptions, SlotUpdate, advance, apply_slot_update,
    auto_advance_bye, current_round, is_round_active, is_round_resolved,
};
pub use errors::{BracketError, BracketResult};
pub use models::{
    BracketMatch, FixtureStatus, MatchId, Participant, ParticipantId, PoolMatch, RankableMatch,
    RankingRow, Slot,
};
pub use rankings::compute_rankings;
