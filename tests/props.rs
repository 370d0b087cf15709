//! Property-based tests for card conservation and scoring over whole games.
//!
//! Increase cases locally with: PROPTEST_CASES=500 cargo test --test props

use std::collections::HashSet;

use indigo::{Card, DECK_SIZE, FINAL_BONUS, Game, GameOptions, Participant, pile_points};
use proptest::prelude::*;

fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn assert_partition(game: &Game) -> Result<(), TestCaseError> {
    let all = game.all_cards();
    prop_assert_eq!(all.len(), DECK_SIZE);
    let unique: HashSet<Card> = all.into_iter().collect();
    prop_assert_eq!(unique.len(), DECK_SIZE);
    Ok(())
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Deck, table, hands and captured piles always hold the 52 cards once,
    /// and a finished game hands out every point plus the bonus.
    #[test]
    fn cards_are_conserved_through_a_whole_game(
        seed in any::<u64>(),
        player_first in any::<bool>(),
        choices in prop::collection::vec(0usize..6, 24),
    ) {
        let mut game = Game::new(GameOptions::default().with_player_first(player_first), seed);
        game.start().unwrap();
        assert_partition(&game)?;

        let mut plays = 0;
        while !game.state().is_over() {
            let report = match game.turn() {
                Participant::Player => {
                    let hand_len = game.hand(Participant::Player).len();
                    game.play_card(choices[plays % choices.len()] % hand_len).unwrap()
                }
                Participant::Computer => game.computer_play().unwrap(),
            };
            plays += 1;
            assert_partition(&game)?;

            if report.capture.is_some() {
                prop_assert!(game.table().is_empty());
            }
        }

        let board = game.final_result().unwrap().scoreboard;
        prop_assert_eq!(board.player.cards_won + board.computer.cards_won, DECK_SIZE);
        prop_assert_eq!(
            board.player.score + board.computer.score,
            pile_points(&game.all_cards()) + FINAL_BONUS
        );
    }

    /// Stopping early never applies the end-of-game bonus.
    #[test]
    fn early_exit_scores_only_captures(seed in any::<u64>(), turns in 0usize..40) {
        let mut game = Game::new(GameOptions::default().with_player_first(true), seed);
        game.start().unwrap();

        for _ in 0..turns {
            match game.turn() {
                Participant::Player => game.play_card(0).unwrap(),
                Participant::Computer => game.computer_play().unwrap(),
            };
        }
        while game.turn() != Participant::Player {
            game.computer_play().unwrap();
        }

        game.exit().unwrap();
        prop_assert!(game.final_result().is_none());
        for who in [Participant::Player, Participant::Computer] {
            prop_assert_eq!(game.score(who), pile_points(game.won_cards(who)));
        }
    }
}
