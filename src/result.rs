//! Round and game result types.

use crate::game::{GameState, Player};

/// Summary of a round collected by [`Game::reset_round`](crate::Game::reset_round).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The player who took the pot.
    pub winner: Player,
    /// Number of cards moved to the winner's deck, including their own.
    pub cards_won: usize,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The loser ran out of cards after losing a round.
    Win(Player),
    /// The loser could not fund a war.
    WinByWarRule(Player),
    /// Neither player could fund a war.
    Draw,
}

impl GameOutcome {
    /// Returns the outcome for a terminal state, or `None` while play continues.
    #[must_use]
    pub const fn from_state(state: GameState) -> Option<Self> {
        match state {
            GameState::PlayerOneWinsGame => Some(Self::Win(Player::One)),
            GameState::PlayerTwoWinsGame => Some(Self::Win(Player::Two)),
            GameState::PlayerOneWinsGameByWarRule => Some(Self::WinByWarRule(Player::One)),
            GameState::PlayerTwoWinsGameByWarRule => Some(Self::WinByWarRule(Player::Two)),
            GameState::DrawByWarRule => Some(Self::Draw),
            _ => None,
        }
    }

    /// Returns the winning player, or `None` for a draw.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        match self {
            Self::Win(player) | Self::WinByWarRule(player) => Some(*player),
            Self::Draw => None,
        }
    }
}
