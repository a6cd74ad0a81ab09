//! CLI configuration management.
//!
//! Consolidates environment variable reads for the default match format
//! and lets command-line flags override them.

use pickleball_scoring::scoring::{BestOf, FormatError, GamesPerSet, MatchFormat, TiebreakTarget};
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Values given on the command line, which win over the environment
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub best_of: Option<u8>,
    pub games_per_set: Option<u8>,
    pub deciding_tiebreak: Option<u16>,
    pub third_place_match: bool,
}

/// Complete CLI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Format applied to score files that don't carry their own
    pub format: MatchFormat,
    /// Whether generated brackets include a third-place match
    pub third_place_match: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: MatchFormat::standard(),
            third_place_match: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// Expected environment variables (all optional):
    /// - `PB_BEST_OF`: 1, 3 or 5 (default: 3)
    /// - `PB_GAMES_PER_SET`: 4 or 6 (default: 6)
    /// - `PB_DECIDING_TIEBREAK`: 7 or 10 (default: 10)
    /// - `PB_THIRD_PLACE`: true or false (default: false)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to an unsupported value
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        let defaults = MatchFormat::standard();

        let best_of = overrides
            .best_of
            .map_or_else(|| parse_env_or("PB_BEST_OF", u8::from(defaults.best_of)), Ok)?;
        let games_per_set = overrides.games_per_set.map_or_else(
            || parse_env_or("PB_GAMES_PER_SET", u8::from(defaults.games_per_set)),
            Ok,
        )?;
        let deciding_tiebreak = overrides.deciding_tiebreak.map_or_else(
            || parse_env_or("PB_DECIDING_TIEBREAK", u16::from(defaults.deciding_tiebreak)),
            Ok,
        )?;

        let format = MatchFormat::new(
            BestOf::try_from(best_of).map_err(|e| invalid("PB_BEST_OF", &e))?,
            GamesPerSet::try_from(games_per_set).map_err(|e| invalid("PB_GAMES_PER_SET", &e))?,
            TiebreakTarget::try_from(deciding_tiebreak)
                .map_err(|e| invalid("PB_DECIDING_TIEBREAK", &e))?,
        );

        let third_place_match =
            overrides.third_place_match || parse_env_or("PB_THIRD_PLACE", false)?;

        Ok(Self {
            format,
            third_place_match,
        })
    }
}

fn invalid(var: &str, err: &FormatError) -> ConfigError {
    ConfigError::Invalid {
        var: var.to_string(),
        reason: err.to_string(),
    }
}

/// Parse `var` if set, falling back to `default` when it isn't.
fn parse_env_or<T: FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var: var.to_string(),
            reason: format!("can't parse {raw:?}"),
        }),
        Err(_) => Ok(default),
    }
}
