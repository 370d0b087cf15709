//! An engine for Indigo, a two-player card game between a human and the computer.
//!
//! The crate provides a [`Game`] type that owns the deck, the table pile and
//! both participants, and runs the whole game flow: the initial deal, turn
//! alternation, trick capture, refills and end-of-game scoring. Reading input
//! and printing are left to the caller.
//!
//! # Example
//!
//! ```
//! use indigo::{Game, GameOptions, Participant};
//!
//! let mut game = Game::new(GameOptions::default().with_player_first(true), 42);
//! game.start().unwrap();
//!
//! while !game.state().is_over() {
//!     let report = match game.turn() {
//!         Participant::Player => game.play_card(0).unwrap(),
//!         Participant::Computer => game.computer_play().unwrap(),
//!     };
//!     if let Some(capture) = report.capture {
//!         assert!(game.table().is_empty());
//!         assert_eq!(game.last_winner(), capture.by);
//!     }
//! }
//! assert!(game.final_result().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod computer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod scoring;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, ParseCardError, PlayError};
pub use game::{Game, GameState, INITIAL_TABLE_CARDS};
pub use hand::{HAND_SIZE, Hand};
pub use options::GameOptions;
pub use player::{Participant, PlayerState};
pub use result::{Capture, FinalResult, Scoreboard, Tally, TurnReport};
pub use scoring::{FINAL_BONUS, bonus_recipient, pile_points};
pub use table::Table;
