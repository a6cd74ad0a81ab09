//! Integration tests for tournament functionality
//!
//! These tests verify the bracket lifecycle from generation through the
//! final, and round-robin standings built from resolved scores.

#[cfg(test)]
mod tournament_tests {
    use pickleball_scoring::scoring::{MatchFormat, MatchResult, SetScore, Side, resolve};
    use pickleball_scoring::tournament::{
        Bracket, BracketError, BracketOptions, FixtureStatus, Participant, PoolMatch, Slot,
        compute_rankings, is_round_active, is_round_resolved,
    };

    fn seeded(n: u32) -> Vec<Participant> {
        (1..=n)
            .map(|i| Participant::new(format!("s{i}"), format!("Seed {i}")).with_seed(i))
            .collect()
    }

    fn straight_sets(side: Side) -> MatchResult {
        let sets = match side {
            Side::Player1 => [SetScore::new(6, 1), SetScore::new(6, 2)],
            Side::Player2 => [SetScore::new(1, 6), SetScore::new(2, 6)],
        };
        resolve(&sets, &MatchFormat::standard(), false, false, None).unwrap()
    }

    #[test]
    fn test_eight_player_bracket_to_champion() {
        let mut bracket =
            Bracket::single_elimination(&seeded(8), BracketOptions::default()).unwrap();
        assert_eq!(bracket.matches().len(), 7);
        assert_eq!(bracket.current_round(), Some(1));

        // Higher seeds win every match: player1 holds the better seed.
        for id in 1..=4 {
            bracket.record_result(id, &straight_sets(Side::Player1)).unwrap();
        }
        assert!(is_round_resolved(bracket.matches(), 1));
        assert_eq!(bracket.current_round(), Some(2));

        for id in 5..=6 {
            bracket.record_result(id, &straight_sets(Side::Player1)).unwrap();
        }
        let final_match = bracket.get(7).unwrap();
        assert_eq!(final_match.player1, Slot::Occupied("s1".into()));
        assert_eq!(final_match.player2, Slot::Occupied("s2".into()));

        bracket.record_result(7, &straight_sets(Side::Player2)).unwrap();
        assert_eq!(bracket.champion(), Some(&"s2".into()));
        assert_eq!(bracket.current_round(), None);
    }

    #[test]
    fn test_three_player_bracket_with_bye_and_third_place() {
        let options = BracketOptions {
            third_place_match: true,
        };
        let mut bracket = Bracket::single_elimination(&seeded(3), options).unwrap();

        // Seed 1 drew the bye; the third-place match received a bye too.
        let bye = bracket.get(1).unwrap();
        assert_eq!(bye.status, FixtureStatus::Completed);
        assert_eq!(bye.winner, Some("s1".into()));
        assert_eq!(bracket.get(4).unwrap().player1, Slot::Bye);

        bracket.record_result(2, &straight_sets(Side::Player2)).unwrap();

        // The loser of the only real semifinal takes third place unopposed.
        let third_place = bracket.get(4).unwrap();
        assert_eq!(third_place.status, FixtureStatus::Completed);
        assert_eq!(third_place.winner, Some("s2".into()));

        let final_match = bracket.get(3).unwrap();
        assert_eq!(final_match.player2, Slot::Occupied("s3".into()));
        assert!(is_round_active(bracket.matches(), 2));
    }

    #[test]
    fn test_double_submission_is_reported() {
        let mut bracket =
            Bracket::single_elimination(&seeded(4), BracketOptions::default()).unwrap();
        bracket.record_result(1, &straight_sets(Side::Player1)).unwrap();
        assert_eq!(
            bracket.record_result(1, &straight_sets(Side::Player1)),
            Err(BracketError::AlreadyCompleted(1))
        );
    }

    #[test]
    fn test_walkover_advances_in_bracket() {
        let mut bracket =
            Bracket::single_elimination(&seeded(2), BracketOptions::default()).unwrap();
        let walkover = resolve(&[], &MatchFormat::standard(), false, true, Some(Side::Player2))
            .unwrap();
        bracket.record_result(1, &walkover).unwrap();
        assert_eq!(bracket.champion(), Some(&"s2".into()));
    }

    #[test]
    fn test_round_robin_standings() {
        let format = MatchFormat::standard();
        let players = vec![
            Participant::new("ana", "Ana"),
            Participant::new("ben", "Ben"),
            Participant::new("cy", "Cy"),
        ];
        let play = |id: u64, p1: &str, p2: &str, sets: &[SetScore]| {
            let result = resolve(sets, &format, false, false, None).unwrap();
            PoolMatch::completed(id, p1.into(), p2.into(), result)
        };

        let matches = vec![
            // Everyone wins once; set difference separates them.
            play(1, "ana", "ben", &[SetScore::new(6, 0), SetScore::new(6, 0)]),
            play(
                2,
                "ben",
                "cy",
                &[SetScore::new(6, 4), SetScore::new(3, 6), SetScore::new(6, 4)],
            ),
            play(
                3,
                "cy",
                "ana",
                &[SetScore::new(6, 4), SetScore::new(4, 6), SetScore::new(6, 6).with_tiebreak(10, 7)],
            ),
            PoolMatch::scheduled(4, "ana".into(), "cy".into()),
        ];

        let rows = compute_rankings(&players, &matches);
        let order: Vec<_> = rows.iter().map(|r| r.participant.name.as_str()).collect();
        assert_eq!(order, vec!["Ana", "Cy", "Ben"]);

        assert!(rows.iter().all(|r| r.wins == 1 && r.losses == 1));
        assert_eq!(rows[0].set_difference(), 1);
        assert_eq!(rows[1].set_difference(), 0);
        assert_eq!(rows[2].set_difference(), -1);
    }

    #[test]
    fn test_standings_tie_on_sets_falls_back_to_games() {
        let format = MatchFormat::standard();
        let players = vec![
            Participant::new("a", "A"),
            Participant::new("b", "B"),
            Participant::new("x", "X"),
            Participant::new("y", "Y"),
        ];
        let result_a = resolve(&[SetScore::new(6, 4), SetScore::new(6, 4)], &format, false, false, None).unwrap();
        let result_b = resolve(&[SetScore::new(6, 0), SetScore::new(6, 1)], &format, false, false, None).unwrap();
        let matches = vec![
            PoolMatch::completed(1, "a".into(), "x".into(), result_a),
            PoolMatch::completed(2, "b".into(), "y".into(), result_b),
        ];

        let rows = compute_rankings(&players, &matches);
        assert_eq!(rows[0].participant.id.as_str(), "b");
        assert_eq!(rows[1].participant.id.as_str(), "a");
    }
}
