//! Command implementations over JSON input files.

use anyhow::{Context, Result};
use log::{debug, info};
use pickleball_scoring::{
    scoring::{MatchFormat, MatchResult, ScoreSubmission, score_match},
    tournament::{
        Bracket, BracketMatch, BracketOptions, MatchId, Participant, PoolMatch, RankingRow,
        compute_rankings,
    },
};
use serde::{Deserialize, de::DeserializeOwned};
use std::{fs, path::Path};

use crate::config::CliConfig;

/// A score file: one submission, optionally with its own format.
#[derive(Debug, Deserialize)]
pub struct ScoreInput {
    #[serde(default)]
    pub format: Option<MatchFormat>,
    #[serde(flatten)]
    pub submission: ScoreSubmission,
}

/// A standings file: the pool roster and its matches.
#[derive(Debug, Deserialize)]
pub struct StandingsInput {
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub matches: Vec<PoolMatch>,
}

/// A bracket file: entrants plus any results entered so far.
#[derive(Debug, Deserialize)]
pub struct BracketInput {
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub format: Option<MatchFormat>,
    #[serde(default)]
    pub results: Vec<BracketResultInput>,
}

#[derive(Debug, Deserialize)]
pub struct BracketResultInput {
    pub match_id: MatchId,
    #[serde(flatten)]
    pub submission: ScoreSubmission,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Validate and resolve a single score.
pub fn score(input: ScoreInput, config: &CliConfig) -> Result<MatchResult> {
    let format = input.format.unwrap_or(config.format);
    debug!("Scoring {} sets under {format:?}", input.submission.sets.len());
    Ok(score_match(&input.submission, &format)?)
}

/// Build the standings table for a pool.
pub fn standings(input: &StandingsInput) -> Vec<RankingRow> {
    info!(
        "Ranking {} participants over {} matches",
        input.participants.len(),
        input.matches.len()
    );
    compute_rankings(&input.participants, &input.matches)
}

/// Generate a bracket and replay the results entered so far, in order.
pub fn bracket(input: BracketInput, config: &CliConfig) -> Result<Bracket> {
    let format = input.format.unwrap_or(config.format);
    let options = BracketOptions {
        third_place_match: config.third_place_match,
    };
    let mut bracket = Bracket::single_elimination(&input.participants, options)?;

    for entry in &input.results {
        let result = score_match(&entry.submission, &format)
            .with_context(|| format!("scoring match {}", entry.match_id))?;
        bracket
            .record_result(entry.match_id, &result)
            .with_context(|| format!("recording match {}", entry.match_id))?;
    }

    Ok(bracket)
}

pub fn render_result(result: &MatchResult) -> String {
    let winner = result
        .winner
        .map_or_else(|| "undecided".to_string(), |side| side.to_string());
    let retired = result
        .retired_at_set_index
        .map_or_else(String::new, |set| format!(", retired during set {set}"));
    format!(
        "{} ({}), winner: {winner}{retired}",
        result.final_score_label, result.status
    )
}

pub fn render_standings(rows: &[RankingRow]) -> String {
    let mut out = String::from("#   Name                  W   L  Sets   Games\n");
    for (pos, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:<3} {:<20} {:>2} {:>3} {:>+5} {:>+7}\n",
            pos + 1,
            row.participant.name,
            row.wins,
            row.losses,
            row.set_difference(),
            row.game_difference()
        ));
    }
    out
}

pub fn render_bracket(bracket: &Bracket) -> String {
    let mut out = String::new();
    let mut round = 0;
    for m in bracket.matches() {
        if m.round != round {
            round = m.round;
            out.push_str(&format!("Round {round}\n"));
        }
        out.push_str(&format!("  {}\n", render_bracket_match(m)));
    }
    if let Some(champion) = bracket.champion() {
        out.push_str(&format!("Champion: {champion}\n"));
    } else if let Some(current) = bracket.current_round() {
        out.push_str(&format!("Current round: {current}\n"));
    }
    out
}

fn render_bracket_match(m: &BracketMatch) -> String {
    let score = m
        .result
        .as_ref()
        .map_or_else(String::new, |r| format!(" {}", r.final_score_label));
    let winner = m
        .winner
        .as_ref()
        .map_or_else(String::new, |w| format!(" -> {w}"));
    format!(
        "[{}] {} vs {} ({}){score}{winner}",
        m.id, m.player1, m.player2, m.status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pickleball_scoring::scoring::Side;

    #[test]
    fn test_score_input_uses_config_format_by_default() {
        let input: ScoreInput = serde_json::from_str(
            r#"{"sets": [{"player1_games": 4, "player2_games": 1}, {"player1_games": 4, "player2_games": 2}]}"#,
        )
        .unwrap();
        let config = CliConfig {
            format: MatchFormat::short_sets(),
            third_place_match: false,
        };
        let result = score(input, &config).unwrap();
        assert_eq!(result.winner, Some(Side::Player1));
        assert_eq!(render_result(&result), "4-1, 4-2 (winner determined), winner: player1");
    }

    #[test]
    fn test_score_input_with_own_format_and_retirement() {
        let input: ScoreInput = serde_json::from_str(
            r#"{
                "format": {"best_of": 1, "games_per_set": 6, "deciding_tiebreak": 7},
                "sets": [{"player1_games": 2, "player2_games": 3}],
                "retired": true,
                "manual_winner": "player1"
            }"#,
        )
        .unwrap();
        let result = score(input, &CliConfig::default()).unwrap();
        assert_eq!(
            render_result(&result),
            "RET (retired), winner: player1, retired during set 1"
        );
    }

    #[test]
    fn test_invalid_score_is_an_error() {
        let input: ScoreInput =
            serde_json::from_str(r#"{"sets": [{"player1_games": 6, "player2_games": 6}]}"#)
                .unwrap();
        let err = score(input, &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("tiebreak points are required"));
    }

    #[test]
    fn test_standings_render() {
        let input: StandingsInput = serde_json::from_str(
            r#"{"participants": [{"id": "a", "name": "Ana"}, {"id": "b", "name": "Ben"}]}"#,
        )
        .unwrap();
        let rows = standings(&input);
        let table = render_standings(&rows);
        assert!(table.lines().nth(1).unwrap().contains("Ana"));
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn test_bracket_replays_results() {
        let input: BracketInput = serde_json::from_str(
            r#"{
                "participants": [
                    {"id": "a", "name": "Ana", "seed": 1},
                    {"id": "b", "name": "Ben", "seed": 2}
                ],
                "results": [
                    {"match_id": 1, "sets": [
                        {"player1_games": 3, "player2_games": 6},
                        {"player1_games": 6, "player2_games": 6, "tiebreak": {"player1": 4, "player2": 7}}
                    ]}
                ]
            }"#,
        )
        .unwrap();
        let bracket = bracket(input, &CliConfig::default()).unwrap();
        assert_eq!(bracket.champion().map(|id| id.as_str()), Some("b"));

        let rendered = render_bracket(&bracket);
        assert!(rendered.contains("3-6, 6-7(7)"));
        assert!(rendered.ends_with("Champion: b\n"));
    }

    #[test]
    fn test_open_bracket_render_shows_rounds() {
        let input: BracketInput = serde_json::from_str(
            r#"{"participants": [
                {"id": "a", "name": "Ana", "seed": 1},
                {"id": "b", "name": "Ben", "seed": 2},
                {"id": "c", "name": "Cy", "seed": 3},
                {"id": "d", "name": "Dee", "seed": 4}
            ]}"#,
        )
        .unwrap();
        let rendered = render_bracket(&bracket(input, &CliConfig::default()).unwrap());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Round 1");
        assert_eq!(lines[1], "  [1] a vs d (scheduled)");
        assert_eq!(lines[3], "Round 2");
        assert_eq!(lines[4], "  [3] TBD vs TBD (scheduled)");
        assert_eq!(lines.last(), Some(&"Current round: 1"));
    }

    #[test]
    fn test_bracket_rejects_unknown_match() {
        let input: BracketInput = serde_json::from_str(
            r#"{
                "participants": [{"id": "a", "name": "Ana"}, {"id": "b", "name": "Ben"}],
                "results": [{"match_id": 9, "walkover": true, "manual_winner": "player1"}]
            }"#,
        )
        .unwrap();
        let err = bracket(input, &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("recording match 9"));
    }
}
