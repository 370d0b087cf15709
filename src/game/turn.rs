use tracing::{debug, info};

use crate::card::Card;
use crate::computer;
use crate::error::PlayError;
use crate::player::Participant;
use crate::result::{Capture, TurnReport};

use super::{Game, GameState};

impl Game {
    fn ensure_turn(&self, who: Participant) -> Result<(), PlayError> {
        if self.state != GameState::InProgress {
            return Err(PlayError::InvalidState);
        }

        if self.turn != who {
            return Err(PlayError::NotYourTurn);
        }

        Ok(())
    }

    /// Human action: play the card at `index` (0-based) from the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, it is the computer's
    /// turn, or there is no card at `index`.
    pub fn play_card(&mut self, index: usize) -> Result<TurnReport, PlayError> {
        self.ensure_turn(Participant::Player)?;

        let card = self
            .player
            .hand
            .take(index)
            .ok_or(PlayError::CardNotFound(index))?;

        Ok(self.resolve_play(Participant::Player, card))
    }

    /// Computer action: play the card picked by the computer heuristic.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress or it is the player's
    /// turn.
    pub fn computer_play(&mut self) -> Result<TurnReport, PlayError> {
        self.ensure_turn(Participant::Computer)?;

        let index =
            computer::choose_card(self.computer.hand.cards(), self.table.top(), &mut self.rng)
                .ok_or(PlayError::InvalidState)?;
        let card = self
            .computer
            .hand
            .take(index)
            .ok_or(PlayError::CardNotFound(index))?;

        Ok(self.resolve_play(Participant::Computer, card))
    }

    /// Claims the whole table for `by`.
    pub(super) fn capture(&mut self, by: Participant) -> Capture {
        let points = self.table.points();
        let pile = self.table.take_all();
        let capture = Capture {
            by,
            cards: pile.len(),
            points,
        };

        self.participant_mut(by).collect(pile, points);
        self.last_winner = by;

        info!(%by, cards = capture.cards, points, "pile captured");
        capture
    }

    /// Places `card` on the table and runs the match, refill and end checks.
    fn resolve_play(&mut self, by: Participant, card: Card) -> TurnReport {
        self.table.push(card);
        debug!(%by, %card, table = self.table.len(), "card played");

        let capture = self.table.top_cards_match().then(|| self.capture(by));

        let mut refilled = false;
        let mut finished = None;
        if self.both_hands_empty() {
            if self.deck.is_empty() {
                finished = Some(self.finish());
            } else {
                // 48 cards follow the initial table, exactly four rounds of 6 + 6.
                self.deal_hands()
                    .expect("deck holds a whole number of refills between empty hands");
                refilled = true;
            }
        }

        self.turn = by.opponent();

        TurnReport {
            by,
            card,
            capture,
            refilled,
            finished,
        }
    }
}
