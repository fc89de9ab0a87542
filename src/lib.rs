//! A War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs two-player War as a state
//! machine: dealing, flips, round resolution, wars, and the war rule that
//! ends the game when a player cannot fund a war.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! while !game.is_over() && game.rounds_played() < 10_000 {
//!     game.player_one_flip();
//!     game.player_two_flip();
//!     game.reset_round();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DealError;
pub use game::{Game, GameState, Player};
pub use options::GameOptions;
pub use result::{GameOutcome, RoundResult};
