//! Scoring engine: set evaluation, score validation and match resolution.
//!
//! Every score-entry form (singles, doubles, league, tournament) goes
//! through the same three steps:
//! - [`validate`] or [`validate_submission`] reports every rule the entered
//!   sets break
//! - [`resolve`] derives the winner, terminal status and final-score label
//! - [`evaluate_set`] answers "is this set over, and who took it" for a
//!   single set and underpins both of the above

pub mod constants;
pub mod entities;
pub mod errors;
pub mod resolver;
pub mod set_evaluator;
pub mod validator;

pub use entities::{
    BestOf, GamesPerSet, MatchFormat, MatchResult, MatchStatus, ScoreSubmission, SetScore, Side,
    TiebreakPoints, TiebreakTarget,
};
pub use errors::{FormatError, ScoringError, ScoringResult};
pub use resolver::{resolve, score_label, score_match};
pub use set_evaluator::{deciding_set, evaluate_set, tiebreak_target};
pub use validator::{ScoreViolation, ValidationReport, validate, validate_submission};
