use core::cmp::Ordering;

use super::state::{Commit, Next};
use super::{Game, GameState, Player};

impl Game {
    /// Player one flips: one card normally, or their war cards during a war.
    ///
    /// Ignored unless the game is waiting on player one.
    pub fn player_one_flip(&mut self) {
        self.flip(Player::One);
    }

    /// Player two flips: one card normally, or their war cards during a war.
    ///
    /// Ignored unless the game is waiting on player two.
    pub fn player_two_flip(&mut self) {
        self.flip(Player::Two);
    }

    /// Moves cards from the top of `player`'s deck onto the table.
    ///
    /// Either player may go first. Once both have a card showing the round is
    /// resolved. The call does nothing if the game is not waiting on `player`.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, GameState, Player};
    ///
    /// let mut game = Game::new(GameOptions::default(), 1);
    /// game.flip(Player::Two);
    /// assert_eq!(game.state(), GameState::WaitingForPlayerOne);
    ///
    /// // Player two already flipped this round.
    /// game.flip(Player::Two);
    /// assert_eq!(game.player_two_played_cards().len(), 1);
    /// ```
    pub fn flip(&mut self, player: Player) {
        let Some((commit, next)) = self.state.flip_transition(player) else {
            return;
        };

        let count = match commit {
            Commit::Single => 1,
            Commit::War => self.options.war_commitment(),
        };

        let (deck, played) = self.seat_mut(player);
        for _ in 0..count {
            // An empty deck only happens after a war drained it; the war rule
            // has already decided the game by then.
            let Some(card) = deck.pop_top() else {
                break;
            };
            log::trace!("{player:?} flips {card}");
            played.push(card);
        }

        match next {
            Next::Wait(state) => self.state = state,
            Next::Resolve => self.resolve_round(),
        }
    }

    /// Compares the last card each player put down and moves to the next state.
    fn resolve_round(&mut self) {
        let (Some(one), Some(two)) = (self.played_one.last(), self.played_two.last()) else {
            return;
        };

        self.state = match one.value().cmp(&two.value()) {
            Ordering::Greater => self.round_won_by(Player::One),
            Ordering::Less => self.round_won_by(Player::Two),
            Ordering::Equal => self.war_or_war_rule(),
        };

        log::debug!("{one} vs {two}: {:?}", self.state);
    }

    fn round_won_by(&self, winner: Player) -> GameState {
        let loser_out = self.deck(winner.opponent()).is_empty();
        match (winner, loser_out) {
            (Player::One, true) => GameState::PlayerOneWinsGame,
            (Player::One, false) => GameState::PlayerOneWinsRound,
            (Player::Two, true) => GameState::PlayerTwoWinsGame,
            (Player::Two, false) => GameState::PlayerTwoWinsRound,
        }
    }

    /// A tie escalates to war only if both players can fund it.
    fn war_or_war_rule(&self) -> GameState {
        let needed = self.options.war_commitment();
        let one_short = self.player_one.len() < needed;
        let two_short = self.player_two.len() < needed;

        match (one_short, two_short) {
            (true, true) => GameState::DrawByWarRule,
            (true, false) => GameState::PlayerTwoWinsGameByWarRule,
            (false, true) => GameState::PlayerOneWinsGameByWarRule,
            (false, false) => GameState::WarWaitingForBothPlayers,
        }
    }
}
