//! Integration tests for end-to-end score entry
//!
//! These tests drive the public API the way a score-entry form does:
//! submit sets, validate, resolve, and read back the canonical result.

use pickleball_scoring::scoring::{
    BestOf, GamesPerSet, MatchFormat, MatchStatus, ScoreSubmission, ScoreViolation, ScoringError,
    SetScore, Side, TiebreakPoints, TiebreakTarget, evaluate_set, resolve, score_match, validate,
};

fn format_with(games_per_set: GamesPerSet) -> MatchFormat {
    MatchFormat::new(BestOf::Three, games_per_set, TiebreakTarget::Ten)
}

#[test]
fn test_best_of_three_straight_sets() {
    let submission = ScoreSubmission::new(vec![SetScore::new(6, 3), SetScore::new(6, 4)]);
    let result = score_match(&submission, &MatchFormat::standard()).unwrap();

    assert_eq!(result.winner, Some(Side::Player1));
    assert_eq!(result.final_score_label, "6-3, 6-4");
    assert_eq!(result.status, MatchStatus::WinnerDetermined);
}

#[test]
fn test_deciding_super_tiebreak() {
    let format = format_with(GamesPerSet::Standard);
    let submission = ScoreSubmission::new(vec![
        SetScore::new(6, 4),
        SetScore::new(4, 6),
        SetScore::new(6, 6).with_tiebreak(10, 8),
    ]);
    let result = score_match(&submission, &format).unwrap();

    assert_eq!(result.winner, Some(Side::Player1));
    assert_eq!(result.final_score_label, "6-4, 4-6, 6-6(10-8)");
}

#[test]
fn test_tiebreak_at_six_all() {
    let format = MatchFormat::standard();
    let won = SetScore::new(6, 6).with_tiebreak(7, 5);
    let level = SetScore::new(6, 6).with_tiebreak(6, 6);

    assert_eq!(evaluate_set(&won, 0, &format), Some(Side::Player1));
    assert_eq!(evaluate_set(&level, 0, &format), None);
}

#[test]
fn test_retirement_mid_match() {
    let format = MatchFormat::standard();
    let submission = ScoreSubmission::new(vec![SetScore::new(3, 5)]).retired(Some(Side::Player2));
    let result = score_match(&submission, &format).unwrap();

    assert_eq!(result.winner, Some(Side::Player2));
    assert_eq!(result.final_score_label, "RET");
    assert_eq!(result.retired_at_set_index, Some(1));
    assert!(result.retired);

    let without_winner = ScoreSubmission::new(vec![SetScore::new(3, 5)]).retired(None);
    assert_eq!(
        score_match(&without_winner, &format),
        Err(ScoringError::WinnerRequired)
    );
}

#[test]
fn test_walkover_needs_no_score() {
    let submission = ScoreSubmission::default().walkover(Some(Side::Player1));
    let result = score_match(&submission, &MatchFormat::standard()).unwrap();
    assert_eq!(result.final_score_label, "W.O.");
    assert!(result.is_terminal());
}

#[test]
fn test_resolve_twice_is_identical() {
    let format = MatchFormat::standard();
    let sets = [
        SetScore::new(4, 6),
        SetScore::new(7, 5),
        SetScore::new(6, 6).with_tiebreak(11, 13),
    ];
    let first = resolve(&sets, &format, false, false, None).unwrap();
    let second = resolve(&sets, &format, false, false, None).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.winner, Some(Side::Player2));
    assert_eq!(first.final_score_label, "4-6, 7-5, 6-6(11-13)");
}

#[test]
fn test_short_sets_match() {
    let format = format_with(GamesPerSet::Short);
    let submission = ScoreSubmission::new(vec![
        SetScore::new(4, 1),
        SetScore::new(4, 4).with_tiebreak(5, 7),
        SetScore::new(5, 3),
    ]);
    let result = score_match(&submission, &format).unwrap();
    assert_eq!(result.winner, Some(Side::Player1));
    assert_eq!(result.final_score_label, "4-1, 4-5(7), 5-3");
}

#[test]
fn test_best_of_five_super_tiebreak_only_in_fifth() {
    let format = MatchFormat::new(BestOf::Five, GamesPerSet::Standard, TiebreakTarget::Ten);
    let sets = [
        SetScore::new(6, 4),
        SetScore::new(6, 6).with_tiebreak(7, 5),
        SetScore::new(2, 6),
        SetScore::new(3, 6),
        SetScore::new(6, 6).with_tiebreak(9, 7),
    ];
    let open = resolve(&sets, &format, false, false, None).unwrap();
    assert_eq!(open.winner, None);

    let mut sets = sets;
    sets[4] = SetScore::new(6, 6).with_tiebreak(12, 10);
    let done = resolve(&sets, &format, false, false, None).unwrap();
    assert_eq!(done.winner, Some(Side::Player1));
    assert_eq!(done.final_score_label, "6-4, 7-6(7), 2-6, 3-6, 6-6(12-10)");
}

#[test]
fn test_form_with_blank_tiebreak_side() {
    let format = MatchFormat::standard();
    let mut set = SetScore::new(6, 6);
    set.tiebreak = Some(TiebreakPoints {
        player1: Some(7),
        player2: None,
    });

    assert_eq!(evaluate_set(&set, 0, &format), None);
    let report = validate(&[set], &format);
    assert_eq!(report.errors, vec![ScoreViolation::PartialTiebreak { set: 1 }]);
}

#[test]
fn test_every_violation_reported_in_one_pass() {
    let format = MatchFormat::standard();
    let submission = ScoreSubmission::new(vec![
        SetScore::new(6, 2),
        SetScore::new(6, 1),
        SetScore::new(6, 4).with_tiebreak(1, 0),
    ]);
    let Err(ScoringError::InvalidScore(report)) = score_match(&submission, &format) else {
        panic!("expected InvalidScore");
    };
    assert_eq!(
        report.errors,
        vec![
            ScoreViolation::UnexpectedTiebreak { set: 3, games: 6 },
            ScoreViolation::PhantomSet {
                set: 3,
                decided_in: 2
            },
        ]
    );
}

#[test]
fn test_result_json_roundtrip_for_storage() {
    let sets = [SetScore::new(6, 3), SetScore::new(6, 6).with_tiebreak(8, 6)];
    let result = resolve(&sets, &MatchFormat::standard(), false, false, None).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let restored: pickleball_scoring::MatchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
}

#[test]
fn test_unreachable_scores_rejected() {
    let format = MatchFormat::standard();

    for sets in [
        vec![SetScore::new(7, 7)],
        vec![SetScore::new(7, 6)],
        vec![SetScore::new(6, 4), SetScore::new(7, 7)],
    ] {
        let report = validate(&sets, &format);
        assert!(!report.is_valid(), "{sets:?}");
    }

    let submission = ScoreSubmission::new(vec![
        SetScore::new(6, 6).with_tiebreak(65534, 7),
        SetScore::new(6, 2),
    ]);
    let Err(ScoringError::InvalidScore(report)) = score_match(&submission, &format) else {
        panic!("expected InvalidScore");
    };
    assert_eq!(
        report.errors,
        vec![ScoreViolation::ImpossibleTiebreak {
            set: 1,
            player1: 65534,
            player2: 7
        }]
    );
}
