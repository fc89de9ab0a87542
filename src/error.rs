//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The source deck cannot be split between two players.
    #[error("deck needs at least 2 cards, got {cards}")]
    InvalidDeck {
        /// Number of cards the rejected deck held.
        cards: usize,
    },
}
