//! Game configuration options.

/// Configuration options for a War game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default().with_war_cards(3);
/// assert_eq!(options.war_cards, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards each player commits on a war flip.
    ///
    /// A tie ends the game under the war rule for any player holding fewer
    /// cards than this. Zero is treated as one.
    pub war_cards: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { war_cards: 2 }
    }
}

impl GameOptions {
    /// Sets the number of cards committed per war flip.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_cards(4);
    /// assert_eq!(options.war_cards, 4);
    /// ```
    #[must_use]
    pub const fn with_war_cards(mut self, war_cards: u8) -> Self {
        self.war_cards = war_cards;
        self
    }

    /// Returns the effective war commitment, never less than one card.
    pub(crate) fn war_commitment(&self) -> usize {
        usize::from(self.war_cards.max(1))
    }
}
