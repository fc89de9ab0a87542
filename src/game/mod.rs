//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::result::GameOutcome;

mod flip;
mod round;
pub mod state;

pub use state::{GameState, Player};

/// Smallest deck that can be split between two players.
const MIN_DECK: usize = 2;

/// A War game engine for two players.
///
/// The game owns both players' decks, the cards they have put on the table
/// this round, and the [`GameState`] that decides what each call does. Calls
/// that do not fit the current state are ignored, so a UI loop can drive the
/// game without tracking whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    /// Player one's undrawn cards.
    player_one: Deck,
    /// Player two's undrawn cards.
    player_two: Deck,
    /// Cards player one has put on the table this round.
    played_one: Vec<Card>,
    /// Cards player two has put on the table this round.
    played_two: Vec<Card>,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Rounds collected so far.
    rounds: usize,
    /// Random number generator used for the opening shuffle and every pot.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game from a standard 52-card deck shuffled with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.player_one_deck_size(), 26);
    /// assert_eq!(game.player_two_deck_size(), 26);
    /// assert_eq!(game.state(), GameState::WaitingForBothPlayers);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        Self::deal(deck, options, rng)
    }

    /// Creates a new game by dealing `deck` between the two players.
    ///
    /// Cards are dealt one at a time from the top, player one first. With an
    /// odd number of cards player one receives the extra card. `seed` drives
    /// the shuffle of every collected pot.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDeck`] if the deck holds fewer than two
    /// cards.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, Deck, Game, GameOptions, Rank, Suit};
    ///
    /// let deck = Deck::from(vec![
    ///     Card::new(Suit::Clubs, Rank::Ace),
    ///     Card::new(Suit::Clubs, Rank::Two),
    ///     Card::new(Suit::Clubs, Rank::Three),
    /// ]);
    /// let game = Game::from_deck(deck, GameOptions::default(), 7).unwrap();
    /// assert_eq!(game.player_one_deck_size(), 2);
    /// assert_eq!(game.player_two_deck_size(), 1);
    /// ```
    pub fn from_deck(deck: Deck, options: GameOptions, seed: u64) -> Result<Self, DealError> {
        if deck.len() < MIN_DECK {
            return Err(DealError::InvalidDeck { cards: deck.len() });
        }

        Ok(Self::deal(deck, options, ChaCha8Rng::seed_from_u64(seed)))
    }

    fn deal(mut source: Deck, options: GameOptions, rng: ChaCha8Rng) -> Self {
        let mut player_one = Deck::empty();
        let mut player_two = Deck::empty();

        while source.len() >= MIN_DECK {
            if let Some(card) = source.pop_top() {
                player_one.push_bottom(card);
            }
            if let Some(card) = source.pop_top() {
                player_two.push_bottom(card);
            }
        }
        if let Some(card) = source.pop_top() {
            player_one.push_bottom(card);
        }

        log::debug!(
            "dealt {} cards to player one, {} to player two",
            player_one.len(),
            player_two.len()
        );

        Self {
            player_one,
            player_two,
            played_one: Vec::new(),
            played_two: Vec::new(),
            options,
            state: GameState::WaitingForBothPlayers,
            rounds: 0,
            rng,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the options this game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of cards left in `player`'s deck.
    #[must_use]
    pub fn deck_size(&self, player: Player) -> usize {
        self.deck(player).len()
    }

    /// Returns the cards `player` has put on the table this round, in the
    /// order they were flipped.
    #[must_use]
    pub fn played_cards(&self, player: Player) -> &[Card] {
        match player {
            Player::One => &self.played_one,
            Player::Two => &self.played_two,
        }
    }

    /// Returns the number of cards left in player one's deck.
    #[must_use]
    pub fn player_one_deck_size(&self) -> usize {
        self.deck_size(Player::One)
    }

    /// Returns the number of cards left in player two's deck.
    #[must_use]
    pub fn player_two_deck_size(&self) -> usize {
        self.deck_size(Player::Two)
    }

    /// Returns player one's cards on the table.
    #[must_use]
    pub fn player_one_played_cards(&self) -> &[Card] {
        self.played_cards(Player::One)
    }

    /// Returns player two's cards on the table.
    #[must_use]
    pub fn player_two_played_cards(&self) -> &[Card] {
        self.played_cards(Player::Two)
    }

    /// Returns the number of rounds collected with [`Game::reset_round`].
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds
    }

    /// Returns whether the game has reached a terminal state.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns how the game ended, or `None` while it is still running.
    #[must_use]
    pub const fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::from_state(self.state)
    }

    const fn deck(&self, player: Player) -> &Deck {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    /// Borrows a player's deck and table pile together.
    const fn seat_mut(&mut self, player: Player) -> (&mut Deck, &mut Vec<Card>) {
        match player {
            Player::One => (&mut self.player_one, &mut self.played_one),
            Player::Two => (&mut self.player_two, &mut self.played_two),
        }
    }
}
