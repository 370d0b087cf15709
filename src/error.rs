//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// A supplied deck is not a complete set of 52 distinct cards.
    #[error("deck must hold each of the 52 cards exactly once")]
    InvalidDeck,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when a participant plays a card or leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game is not in progress.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this participant's turn.
    #[error("not this participant's turn")]
    NotYourTurn,
    /// No card at the requested hand index.
    #[error("no card at index {0} in hand")]
    CardNotFound(usize),
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input was empty.
    #[error("empty card text")]
    Empty,
    /// The rank label was not recognised.
    #[error("invalid rank")]
    InvalidRank,
    /// The suit symbol was not recognised.
    #[error("invalid suit")]
    InvalidSuit,
}
