//! Computer card selection tests.

use std::collections::BTreeSet;

use indigo::Card;
use indigo::computer::{candidate_cards, choose_card, rank_duplicates, suit_duplicates, tie_break};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TRIALS: u64 = 200;

fn cards(text: &str) -> Vec<Card> {
    text.split_whitespace().map(|card| card.parse().unwrap()).collect()
}

/// Every index picked across many seeded trials.
fn picks(hand: &[Card], top: Option<Card>) -> BTreeSet<usize> {
    (0..TRIALS)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            choose_card(hand, top, &mut rng).unwrap()
        })
        .collect()
}

fn indices(list: &[usize]) -> BTreeSet<usize> {
    list.iter().copied().collect()
}

#[test]
fn empty_hand_has_no_choice() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(choose_card(&[], None, &mut rng), None);
    assert_eq!(tie_break(&[], &mut rng), None);
}

#[test]
fn last_card_is_always_played() {
    let hand = cards("7♣");
    assert_eq!(picks(&hand, None), indices(&[0]));
    assert_eq!(picks(&hand, Some("K♠".parse().unwrap())), indices(&[0]));
}

#[test]
fn empty_table_picks_within_suit_duplicates() {
    let hand = cards("2♥ 7♥ 3♣ 9♠ J♦");
    assert_eq!(suit_duplicates(&hand), vec![0, 1]);
    assert_eq!(picks(&hand, None), indices(&[0, 1]));
}

#[test]
fn empty_table_picks_within_rank_duplicates() {
    let hand = cards("5♥ 8♦ 5♣ J♠");
    assert!(suit_duplicates(&hand).is_empty());
    assert_eq!(rank_duplicates(&hand), vec![0, 2]);
    assert_eq!(picks(&hand, None), indices(&[0, 2]));
}

#[test]
fn suit_duplicates_take_priority_over_rank_duplicates() {
    let hand = cards("5♥ 9♥ 5♣ K♠");
    assert_eq!(picks(&hand, None), indices(&[0, 1]));
}

#[test]
fn first_duplicated_suit_in_hand_order_wins() {
    let hand = cards("3♣ 4♦ 7♣ 8♦ Q♦");
    assert_eq!(suit_duplicates(&hand), vec![0, 2]);
    assert_eq!(picks(&hand, None), indices(&[0, 2]));
}

#[test]
fn hand_without_duplicates_picks_uniformly() {
    let hand = cards("A♦ 2♥ 3♠ 4♣");
    assert_eq!(picks(&hand, None), indices(&[0, 1, 2, 3]));
}

#[test]
fn two_suit_matches_are_preferred() {
    let hand = cards("4♦ 2♠ 9♠ K♥");
    let top = "K♠".parse().unwrap();
    assert_eq!(candidate_cards(&hand, top), vec![1, 2]);
    assert_eq!(picks(&hand, Some(top)), indices(&[1]));
}

#[test]
fn rank_match_beats_a_single_suit_match() {
    let hand = cards("2♠ K♥ 4♦");
    let top = "K♠".parse().unwrap();
    assert_eq!(candidate_cards(&hand, top), vec![1]);
    assert_eq!(picks(&hand, Some(top)), indices(&[1]));
}

#[test]
fn single_suit_match_is_used_without_rank_matches() {
    let hand = cards("4♦ 2♠ 5♥");
    let top = "K♠".parse().unwrap();
    assert_eq!(candidate_cards(&hand, top), vec![1]);
    assert_eq!(picks(&hand, Some(top)), indices(&[1]));
}

#[test]
fn no_candidates_falls_back_to_tie_break() {
    let hand = cards("2♦ 5♥ 4♦");
    let top = "K♠".parse().unwrap();
    assert!(candidate_cards(&hand, top).is_empty());
    assert_eq!(picks(&hand, Some(top)), indices(&[0, 2]));
}
