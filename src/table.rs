//! The face-up pile of cards played since the last capture.

use alloc::vec::Vec;

use crate::card::Card;
use crate::scoring::pile_points;

/// Cards on the table, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    cards: Vec<Card>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Places a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Returns the most recently played card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns whether the top card matches the card beneath it by rank or suit.
    ///
    /// Always `false` with fewer than two cards on the table.
    #[must_use]
    pub fn top_cards_match(&self) -> bool {
        match self.cards.as_slice() {
            [.., below, top] => top.matches(below),
            _ => false,
        }
    }

    /// Returns the point value of the whole pile.
    #[must_use]
    pub fn points(&self) -> u32 {
        pile_points(&self.cards)
    }

    /// Removes every card from the table at once.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the cards on the table, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
