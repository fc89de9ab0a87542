use alloc::vec::Vec;
use rand::seq::SliceRandom;

use crate::result::RoundResult;

use super::{Game, GameState, Player};

impl Game {
    /// Hands the pot to the round winner and starts the next round.
    ///
    /// Both table piles are gathered, shuffled, and placed one by one on the
    /// bottom of the winner's deck. Returning the pot in a fixed order can
    /// make some decks repeat the same sequence of rounds forever, so the
    /// shuffle is part of the rules here.
    ///
    /// Returns `None` and does nothing unless a round has just been won.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, Deck, Game, GameOptions, GameState, Player, Rank, Suit};
    ///
    /// let deck: Deck = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four]
    ///     .into_iter()
    ///     .map(|rank| Card::new(Suit::Clubs, rank))
    ///     .collect();
    /// let mut game = Game::from_deck(deck, GameOptions::default(), 3).unwrap();
    /// game.player_one_flip();
    /// game.player_two_flip();
    ///
    /// let round = game.reset_round().unwrap();
    /// assert_eq!(round.winner, Player::One);
    /// assert_eq!(round.cards_won, 2);
    /// assert_eq!(game.state(), GameState::WaitingForBothPlayers);
    /// assert_eq!(game.player_one_deck_size(), 3);
    /// ```
    pub fn reset_round(&mut self) -> Option<RoundResult> {
        let winner = self.state.round_winner()?;

        let mut pot: Vec<_> = self
            .played_one
            .drain(..)
            .chain(self.played_two.drain(..))
            .collect();
        pot.shuffle(&mut self.rng);

        let cards_won = pot.len();
        let deck = match winner {
            Player::One => &mut self.player_one,
            Player::Two => &mut self.player_two,
        };
        deck.extend(pot);

        self.state = GameState::WaitingForBothPlayers;
        self.rounds += 1;

        log::debug!(
            "round {} to {winner:?}: {cards_won} cards, decks {}/{}",
            self.rounds,
            self.player_one.len(),
            self.player_two.len()
        );

        Some(RoundResult { winner, cards_won })
    }
}
