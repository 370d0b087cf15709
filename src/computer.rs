//! Card selection for the computer opponent.
//!
//! Selection works on hand indices so the engine can remove the chosen card
//! without searching for it again. All randomness comes from the caller's RNG,
//! which keeps every choice reproducible under a fixed seed.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;

/// A rule that proposes a group of hand indices to pick from.
type TieBreakRule = fn(&[Card]) -> Vec<usize>;

/// Tie-break rules in priority order; the first non-empty group wins.
const TIE_BREAK_RULES: [TieBreakRule; 3] = [suit_duplicates, rank_duplicates, whole_hand];

/// Picks the index of the card the computer plays.
///
/// Returns `None` only for an empty hand.
pub fn choose_card<R: Rng + ?Sized>(
    hand: &[Card],
    top: Option<Card>,
    rng: &mut R,
) -> Option<usize> {
    match (hand.len(), top) {
        (0, _) => None,
        (1, _) => Some(0),
        (_, None) => tie_break(hand, rng),
        (_, Some(top)) => candidate_cards(hand, top)
            .first()
            .copied()
            .or_else(|| tie_break(hand, rng)),
    }
}

/// Returns the indices of cards that would capture `top`.
///
/// Suit matches are preferred when there are at least two of them; otherwise
/// rank matches are used if any exist, falling back to the (possibly single or
/// empty) suit matches.
#[must_use]
pub fn candidate_cards(hand: &[Card], top: Card) -> Vec<usize> {
    let by_suit = indices_where(hand, |card| card.suit == top.suit);
    let by_rank = indices_where(hand, |card| card.rank == top.rank);

    if by_suit.len() < 2 && !by_rank.is_empty() {
        by_rank
    } else {
        by_suit
    }
}

/// Picks a random index from the first group proposed by the tie-break rules.
///
/// Returns `None` only for an empty hand.
pub fn tie_break<R: Rng + ?Sized>(hand: &[Card], rng: &mut R) -> Option<usize> {
    let group = TIE_BREAK_RULES
        .iter()
        .map(|rule| rule(hand))
        .find(|group| !group.is_empty())?;
    Some(group[rng.random_range(0..group.len())])
}

/// Indices of the first suit (by first appearance) held at least twice.
#[must_use]
pub fn suit_duplicates(hand: &[Card]) -> Vec<usize> {
    first_duplicate_group(hand, |card| card.suit)
}

/// Indices of the first rank (by first appearance) held at least twice.
#[must_use]
pub fn rank_duplicates(hand: &[Card]) -> Vec<usize> {
    first_duplicate_group(hand, |card| card.rank)
}

fn whole_hand(hand: &[Card]) -> Vec<usize> {
    (0..hand.len()).collect()
}

fn first_duplicate_group<K: PartialEq>(hand: &[Card], key: impl Fn(&Card) -> K) -> Vec<usize> {
    for (start, card) in hand.iter().enumerate() {
        let wanted = key(card);
        // Only the first occurrence of a key opens a group.
        if hand[..start].iter().any(|earlier| key(earlier) == wanted) {
            continue;
        }
        let group = indices_where(hand, |other| key(other) == wanted);
        if group.len() >= 2 {
            return group;
        }
    }
    Vec::new()
}

fn indices_where(hand: &[Card], predicate: impl Fn(&Card) -> bool) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| predicate(card))
        .map(|(index, _)| index)
        .collect()
}
