use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::DealError;
use crate::hand::HAND_SIZE;

use super::{Game, GameState};

/// Cards placed face up on the table before the first play.
pub const INITIAL_TABLE_CARDS: usize = 4;

impl Game {
    /// Deals six cards to the player, then six to the computer.
    pub(super) fn deal_hands(&mut self) -> Result<(), DealError> {
        let player_cards = self.deck.draw(HAND_SIZE)?;
        let computer_cards = self.deck.draw(HAND_SIZE)?;
        self.player.hand.add_cards(player_cards);
        self.computer.hand.add_cards(computer_cards);

        debug!(remaining = self.deck.len(), "hands dealt");
        Ok(())
    }

    /// Performs the initial deal: four cards to the table, then six to each hand.
    ///
    /// Returns the initial table cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been dealt.
    pub fn start(&mut self) -> Result<Vec<Card>, DealError> {
        if self.state != GameState::WaitingToDeal {
            return Err(DealError::InvalidState);
        }

        let initial = self.deck.draw(INITIAL_TABLE_CARDS)?;
        self.table.extend(initial.iter().copied());
        self.deal_hands()?;

        self.state = GameState::InProgress;
        debug!(first = %self.turn, "game started");

        Ok(initial)
    }
}
