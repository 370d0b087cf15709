//! Point table and end-of-game bonus.

use crate::card::Card;
use crate::player::Participant;

/// Points awarded at the end of the game for holding the most cards.
pub const FINAL_BONUS: u32 = 3;

/// Returns the point value of a pile: one point per A, 10, J, Q or K.
#[must_use]
pub fn pile_points(cards: &[Card]) -> u32 {
    cards.iter().map(|card| card.rank.points()).sum()
}

/// Decides who receives [`FINAL_BONUS`].
///
/// The human player takes it with 27 or more cards, or on a 26-26 split when
/// the computer won the last trick. Every other distribution goes to the
/// computer.
#[must_use]
pub fn bonus_recipient(player_cards_won: usize, last_winner: Participant) -> Participant {
    match player_cards_won {
        27..=52 => Participant::Player,
        26 if last_winner != Participant::Player => Participant::Player,
        _ => Participant::Computer,
    }
}
