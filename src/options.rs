//! Game configuration options.

/// Configuration options for an Indigo game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use indigo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_first(true)
///     .with_reveal_computer_hand(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether the human player makes the first play.
    pub player_first: bool,
    /// Presentation hint for front ends: show the computer's hand before it
    /// plays. The engine itself never reads this.
    pub reveal_computer_hand: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_first: false,
            reveal_computer_hand: true,
        }
    }
}

impl GameOptions {
    /// Sets whether the human player goes first.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_first(true);
    /// assert!(options.player_first);
    /// ```
    #[must_use]
    pub const fn with_player_first(mut self, player_first: bool) -> Self {
        self.player_first = player_first;
        self
    }

    /// Sets whether front ends show the computer's hand before each of its
    /// plays. Play is identical either way.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::GameOptions;
    ///
    /// let options = GameOptions::default().with_reveal_computer_hand(false);
    /// assert!(!options.reveal_computer_hand);
    ///
    /// // Same seed, same game, whatever the front end displays.
    /// let mut shown = indigo::Game::new(GameOptions::default(), 3);
    /// let mut hidden = indigo::Game::new(options, 3);
    /// assert_eq!(shown.start(), hidden.start());
    /// assert_eq!(shown.computer_play(), hidden.computer_play());
    /// ```
    #[must_use]
    pub const fn with_reveal_computer_hand(mut self, reveal: bool) -> Self {
        self.reveal_computer_hand = reveal;
        self
    }
}
