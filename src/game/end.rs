use tracing::info;

use crate::error::PlayError;
use crate::result::{FinalResult, Scoreboard};
use crate::scoring::{FINAL_BONUS, bonus_recipient};

use super::{Game, GameState};

impl Game {
    /// Ends a game whose deck and hands are exhausted.
    ///
    /// Whatever is left on the table goes to the last trick winner without a
    /// match check, then the majority bonus is applied.
    pub(super) fn finish(&mut self) -> FinalResult {
        let remaining_table = if self.table.is_empty() {
            None
        } else {
            Some(self.capture(self.last_winner))
        };

        let bonus_to = bonus_recipient(self.player.cards_won(), self.last_winner);
        self.participant_mut(bonus_to).add_bonus(FINAL_BONUS);

        let result = FinalResult {
            remaining_table,
            bonus_to,
            scoreboard: self.scoreboard(),
        };

        self.state = GameState::Finished;
        self.final_result = Some(result);

        info!(
            player_score = result.scoreboard.player.score,
            computer_score = result.scoreboard.computer.score,
            %bonus_to,
            "game finished"
        );
        result
    }

    /// Leaves the game early.
    ///
    /// No end-of-game scoring is applied. The running scoreboard is returned
    /// only when the deck happened to be empty at the time of leaving.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress.
    pub fn exit(&mut self) -> Result<Option<Scoreboard>, PlayError> {
        if self.state != GameState::InProgress {
            return Err(PlayError::InvalidState);
        }

        self.state = GameState::Exited;
        info!(cards_remaining = self.deck.len(), "player left the game");

        Ok(self.deck.is_empty().then(|| self.scoreboard()))
    }
}
