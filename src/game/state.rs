//! Game state types.

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The first player. Receives the odd card when dealing.
    One,
    /// The second player.
    Two,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// Game state.
///
/// This is the only control variable of a [`Game`](crate::Game): it decides
/// which flips are accepted and whether a round can be reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// A new round has started; either player may flip.
    #[default]
    WaitingForBothPlayers,
    /// Player two has flipped; waiting for player one.
    WaitingForPlayerOne,
    /// Player one has flipped; waiting for player two.
    WaitingForPlayerTwo,
    /// Player one won the round; the pot is waiting to be collected.
    PlayerOneWinsRound,
    /// Player two won the round; the pot is waiting to be collected.
    PlayerTwoWinsRound,
    /// A tie started a war; either player may commit their war cards.
    WarWaitingForBothPlayers,
    /// Player two has committed their war cards; waiting for player one.
    WarWaitingForPlayerOne,
    /// Player one has committed their war cards; waiting for player two.
    WarWaitingForPlayerTwo,
    /// Player two ran out of cards.
    PlayerOneWinsGame,
    /// Player one ran out of cards.
    PlayerTwoWinsGame,
    /// Player two could not fund a war.
    PlayerOneWinsGameByWarRule,
    /// Player one could not fund a war.
    PlayerTwoWinsGameByWarRule,
    /// Neither player could fund a war.
    DrawByWarRule,
}

/// Number of cards a flip moves from deck to table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Commit {
    /// One face-up card.
    Single,
    /// The configured war commitment; only the last card counts.
    War,
}

/// What follows once the flipped cards are on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Next {
    /// Wait for the opponent.
    Wait(GameState),
    /// Both players have a card showing; compare them.
    Resolve,
}

impl GameState {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::PlayerOneWinsGame
                | Self::PlayerTwoWinsGame
                | Self::PlayerOneWinsGameByWarRule
                | Self::PlayerTwoWinsGameByWarRule
                | Self::DrawByWarRule
        )
    }

    /// Returns whether a war is in progress.
    #[must_use]
    pub const fn is_war(self) -> bool {
        matches!(
            self,
            Self::WarWaitingForBothPlayers
                | Self::WarWaitingForPlayerOne
                | Self::WarWaitingForPlayerTwo
        )
    }

    /// Returns the winner of a finished round that has not been reset yet.
    #[must_use]
    pub const fn round_winner(self) -> Option<Player> {
        match self {
            Self::PlayerOneWinsRound => Some(Player::One),
            Self::PlayerTwoWinsRound => Some(Player::Two),
            _ => None,
        }
    }

    /// Returns whether a flip by `player` would be accepted.
    #[must_use]
    pub const fn awaiting(self, player: Player) -> bool {
        self.flip_transition(player).is_some()
    }

    /// Transition table for a flip by `player`.
    ///
    /// `None` means the flip is ignored in this state.
    pub(crate) const fn flip_transition(self, player: Player) -> Option<(Commit, Next)> {
        let transition = match (player, self) {
            (Player::One, Self::WaitingForBothPlayers) => {
                (Commit::Single, Next::Wait(Self::WaitingForPlayerTwo))
            }
            (Player::Two, Self::WaitingForBothPlayers) => {
                (Commit::Single, Next::Wait(Self::WaitingForPlayerOne))
            }
            (Player::One, Self::WaitingForPlayerOne) | (Player::Two, Self::WaitingForPlayerTwo) => {
                (Commit::Single, Next::Resolve)
            }
            (Player::One, Self::WarWaitingForBothPlayers) => {
                (Commit::War, Next::Wait(Self::WarWaitingForPlayerTwo))
            }
            (Player::Two, Self::WarWaitingForBothPlayers) => {
                (Commit::War, Next::Wait(Self::WarWaitingForPlayerOne))
            }
            (Player::One, Self::WarWaitingForPlayerOne)
            | (Player::Two, Self::WarWaitingForPlayerTwo) => (Commit::War, Next::Resolve),
            _ => return None,
        };
        Some(transition)
    }
}
