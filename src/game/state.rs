//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Deck shuffled, waiting for the initial deal.
    WaitingToDeal,
    /// Cards dealt; participants are taking turns.
    InProgress,
    /// Deck and both hands exhausted; final scoring applied.
    Finished,
    /// The human player left before the deck ran out.
    Exited,
}

impl GameState {
    /// Returns whether no further plays are possible.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Finished | Self::Exited)
    }
}
