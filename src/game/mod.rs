//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::player::{Participant, PlayerState};
use crate::result::{FinalResult, Scoreboard, Tally};
use crate::table::Table;

mod deal;
mod end;
pub mod state;
mod turn;

pub use deal::INITIAL_TABLE_CARDS;
pub use state::GameState;

/// An Indigo game between a human player and the computer.
///
/// The game exclusively owns the deck, the table pile and both participants'
/// state. Cards only move between them through dealing, playing and capturing,
/// so at every turn boundary they partition the 52-card deck.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    deck: Deck,
    /// Cards played since the last capture.
    table: Table,
    /// The human player.
    player: PlayerState,
    /// The computer opponent.
    computer: PlayerState,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Whose play is next.
    turn: Participant,
    /// Who captured most recently; takes the leftover table at the end.
    last_winner: Participant,
    /// Set once the deck and both hands are exhausted.
    final_result: Option<FinalResult>,
    /// Random number generator for the computer's choices.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let table = game.start().unwrap();
    /// assert_eq!(table.len(), 4);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::assemble(options, deck, rng)
    }

    /// Creates a game that deals from a caller-supplied deck order.
    ///
    /// The seed still drives the computer's random choices.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDeck`] unless the deck holds each of the 52
    /// cards exactly once.
    pub fn with_deck(options: GameOptions, deck: Deck, seed: u64) -> Result<Self, DealError> {
        let complete = deck.len() == DECK_SIZE
            && Deck::ordered()
                .cards()
                .iter()
                .all(|card| deck.cards().contains(card));
        if !complete {
            return Err(DealError::InvalidDeck);
        }

        Ok(Self::assemble(options, deck, ChaCha8Rng::seed_from_u64(seed)))
    }

    fn assemble(options: GameOptions, deck: Deck, rng: ChaCha8Rng) -> Self {
        let first = if options.player_first {
            Participant::Player
        } else {
            Participant::Computer
        };

        Self {
            deck,
            table: Table::new(),
            player: PlayerState::new(),
            computer: PlayerState::new(),
            options,
            state: GameState::WaitingToDeal,
            turn: first,
            last_winner: first,
            final_result: None,
            rng,
        }
    }

    const fn participant(&self, who: Participant) -> &PlayerState {
        match who {
            Participant::Player => &self.player,
            Participant::Computer => &self.computer,
        }
    }

    const fn participant_mut(&mut self, who: Participant) -> &mut PlayerState {
        match who {
            Participant::Player => &mut self.player,
            Participant::Computer => &mut self.computer,
        }
    }

    fn both_hands_empty(&self) -> bool {
        self.player.hand.is_empty() && self.computer.hand.is_empty()
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whose play is next.
    #[must_use]
    pub const fn turn(&self) -> Participant {
        self.turn
    }

    /// Returns who captured a pile most recently.
    ///
    /// Before the first capture this is whoever played first.
    #[must_use]
    pub const fn last_winner(&self) -> Participant {
        self.last_winner
    }

    /// Returns the table pile.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns a participant's hand.
    #[must_use]
    pub fn hand(&self, who: Participant) -> &[Card] {
        self.participant(who).hand.cards()
    }

    /// Returns a participant's score.
    #[must_use]
    pub const fn score(&self, who: Participant) -> u32 {
        self.participant(who).score()
    }

    /// Returns how many cards a participant has captured.
    #[must_use]
    pub fn cards_won(&self, who: Participant) -> usize {
        self.participant(who).cards_won()
    }

    /// Returns the cards a participant has captured.
    #[must_use]
    pub fn won_cards(&self, who: Participant) -> &[Card] {
        self.participant(who).won()
    }

    /// Returns both participants' running totals.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        let tally = |state: &PlayerState| Tally {
            score: state.score(),
            cards_won: state.cards_won(),
        };
        Scoreboard {
            player: tally(&self.player),
            computer: tally(&self.computer),
        }
    }

    /// Returns the final result once the game has finished naturally.
    #[must_use]
    pub const fn final_result(&self) -> Option<&FinalResult> {
        self.final_result.as_ref()
    }

    /// Returns every card the game currently tracks: deck, table, hands and
    /// captured piles.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend_from_slice(self.deck.cards());
        cards.extend_from_slice(self.table.cards());
        for who in [Participant::Player, Participant::Computer] {
            let state = self.participant(who);
            cards.extend_from_slice(state.hand.cards());
            cards.extend_from_slice(state.won());
        }
        cards
    }
}
