//! Turn and end-of-game result types.

use crate::card::Card;
use crate::player::Participant;

/// A pile claimed by one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    /// Who took the pile.
    pub by: Participant,
    /// Number of cards in the pile.
    pub cards: usize,
    /// Point value of the pile.
    pub points: u32,
}

/// Score and cards won for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Cumulative score.
    pub score: u32,
    /// Cumulative number of cards captured.
    pub cards_won: usize,
}

/// Running totals for both participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    /// The human player's totals.
    pub player: Tally,
    /// The computer's totals.
    pub computer: Tally,
}

impl Scoreboard {
    /// Returns the totals for one participant.
    #[must_use]
    pub const fn of(&self, participant: Participant) -> Tally {
        match participant {
            Participant::Player => self.player,
            Participant::Computer => self.computer,
        }
    }
}

/// Outcome of a game that ran until the deck was exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalResult {
    /// Cards left on the table, awarded to the last trick winner.
    pub remaining_table: Option<Capture>,
    /// Who received the end-of-game bonus.
    pub bonus_to: Participant,
    /// Final totals, bonus included.
    pub scoreboard: Scoreboard,
}

/// What happened during one play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Who played.
    pub by: Participant,
    /// The card played.
    pub card: Card,
    /// The pile claimed by this play, if it matched the previous top card.
    pub capture: Option<Capture>,
    /// Whether both hands were empty and got six fresh cards each.
    pub refilled: bool,
    /// Set when this play exhausted the last cards and ended the game.
    pub finished: Option<FinalResult>,
}
