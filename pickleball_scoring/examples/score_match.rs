//! Score Match Example
//!
//! Walks through validating and resolving scores, then feeding the results
//! into a small bracket and a round-robin table.

use pickleball_scoring::scoring::{MatchFormat, ScoreSubmission, SetScore, Side, score_match};
use pickleball_scoring::tournament::{
    Bracket, BracketOptions, Participant, PoolMatch, compute_rankings,
};

fn main() {
    println!("=== Pickleball Scoring Example ===\n");
    let format = MatchFormat::standard();

    // Example 1: A valid three-set match with a super tiebreak
    println!("Example 1: Deciding super tiebreak");
    let submission = ScoreSubmission::new(vec![
        SetScore::new(6, 4),
        SetScore::new(4, 6),
        SetScore::new(6, 6).with_tiebreak(10, 8),
    ]);
    match score_match(&submission, &format) {
        Ok(result) => println!(
            "Winner: {:?}, score: {}\n",
            result.winner, result.final_score_label
        ),
        Err(err) => println!("Rejected: {err}\n"),
    }

    // Example 2: Every problem with a bad score, reported at once
    println!("Example 2: Invalid score");
    let submission = ScoreSubmission::new(vec![
        SetScore::new(9, 2),
        SetScore::new(6, 6),
        SetScore::new(6, 1),
    ]);
    if let Err(err) = score_match(&submission, &format) {
        println!("Rejected: {err}\n");
    }

    // Example 3: Retirement
    println!("Example 3: Retirement");
    let submission = ScoreSubmission::new(vec![SetScore::new(3, 5)]).retired(Some(Side::Player2));
    if let Ok(result) = score_match(&submission, &format) {
        println!(
            "Winner: {:?}, score: {}, retired during set {:?}\n",
            result.winner, result.final_score_label, result.retired_at_set_index
        );
    }

    // Example 4: A four-player bracket
    println!("Example 4: Bracket");
    let entrants: Vec<Participant> = ["Ana", "Ben", "Cy", "Dee"]
        .iter()
        .zip(1..)
        .map(|(name, seed)| Participant::new(name.to_lowercase(), *name).with_seed(seed))
        .collect();
    let Ok(mut bracket) = Bracket::single_elimination(&entrants, BracketOptions::default()) else {
        return;
    };
    let straight = ScoreSubmission::new(vec![SetScore::new(6, 2), SetScore::new(6, 3)]);
    let Ok(result) = score_match(&straight, &format) else {
        return;
    };
    for id in [1, 2, 3] {
        if let Err(err) = bracket.record_result(id, &result) {
            println!("Match {id}: {err}");
        }
    }
    println!("Champion: {:?}\n", bracket.champion());

    // Example 5: Round-robin standings
    println!("Example 5: Standings");
    let matches = vec![
        PoolMatch::completed(1, "ana".into(), "ben".into(), result.clone()),
        PoolMatch::completed(2, "cy".into(), "dee".into(), result),
    ];
    for (pos, row) in compute_rankings(&entrants, &matches).iter().enumerate() {
        println!(
            "{}. {:<4} W{} L{} sets {:+} games {:+}",
            pos + 1,
            row.participant.name,
            row.wins,
            row.losses,
            row.set_difference(),
            row.game_difference()
        );
    }
}
