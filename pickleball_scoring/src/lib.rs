//! # Pickleball Scoring
//!
//! Match scoring and tournament ranking engine for pickleball.
//!
//! The engine is a pure computation layer: it takes set scores, match
//! formats, participants and matches as arguments and returns validation
//! reports, match results, bracket updates and standings. It performs no
//! I/O and keeps no state between calls, so every function is safe to call
//! from any number of threads at once.
//!
//! ## Architecture
//!
//! Score entry flows through the engine in this order:
//!
//! - **Set evaluation**: is a set over, and who took it (regular sets,
//!   tiebreaks, deciding super tiebreaks)
//! - **Validation**: every rule a sequence of sets breaks, reported at once
//! - **Resolution**: winner, terminal status and final-score label,
//!   including retirement and walkover
//! - **Bracket progression** (elimination events) or **rankings**
//!   (round-robin and pool events) consume resolved results
//!
//! ## Core Modules
//!
//! - [`scoring`]: set evaluator, score validator and match resolver
//! - [`tournament`]: bracket progression and standings
//!
//! ## Example
//!
//! ```
//! use pickleball_scoring::{MatchFormat, ScoreSubmission, SetScore, Side, score_match};
//!
//! let submission = ScoreSubmission::new(vec![SetScore::new(6, 3), SetScore::new(6, 4)]);
//! let result = score_match(&submission, &MatchFormat::standard()).unwrap();
//!
//! assert_eq!(result.winner, Some(Side::Player1));
//! assert_eq!(result.final_score_label, "6-3, 6-4");
//! ```

/// Set evaluation, score validation and match resolution.
pub mod scoring;
pub use scoring::{
    MatchFormat, MatchResult, MatchStatus, ScoreSubmission, ScoreViolation, ScoringError, SetScore,
    Side, ValidationReport, evaluate_set, resolve, score_match, validate,
};

/// Elimination brackets and round-robin standings.
pub mod tournament;
pub use tournament::{
    Bracket, BracketError, BracketMatch, Participant, ParticipantId, PoolMatch, RankingRow,
    compute_rankings,
};
