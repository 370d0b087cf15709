//! Participants and their running totals.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::hand::Hand;

/// One of the two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

impl Participant {
    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "Player",
            Self::Computer => "Computer",
        })
    }
}

/// Per-participant state: hand, score, and the cards captured so far.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    /// Cards currently held.
    pub hand: Hand,
    /// Cumulative score.
    score: u32,
    /// Every card captured, in capture order.
    won: Vec<Card>,
}

impl PlayerState {
    /// Creates an empty participant state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            score: 0,
            won: Vec::new(),
        }
    }

    /// Returns the cumulative score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of cards captured.
    #[must_use]
    pub fn cards_won(&self) -> usize {
        self.won.len()
    }

    /// Returns the captured cards.
    #[must_use]
    pub fn won(&self) -> &[Card] {
        &self.won
    }

    /// Moves a captured pile into this participant's winnings.
    pub(crate) fn collect(&mut self, pile: Vec<Card>, points: u32) {
        self.won.extend(pile);
        self.score += points;
    }

    pub(crate) const fn add_bonus(&mut self, points: u32) {
        self.score += points;
    }
}
