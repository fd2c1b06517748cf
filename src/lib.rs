//! A Flip 7 push-your-luck card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full game: dealing,
//! draw-or-stay turns, duplicate busts, round settlement, dealer rotation,
//! and game-over detection. Every call returns a structured result so the
//! caller decides how to present it.
//!
//! # Example
//!
//! ```
//! use flip7::{Game, GameOptions, TurnAction};
//!
//! let game = Game::new(GameOptions::default(), 42).unwrap();
//! let result = game.play_turn(true).unwrap();
//! assert!(matches!(
//!     result.action,
//!     TurnAction::Drew(_) | TurnAction::Busted(_)
//! ));
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
pub mod player;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, CardKind, DECK_SIZE};
pub use deck::{Deck, Discard, draw_with_reclaim};
pub use error::{DrawError, SetupError, TurnError};
pub use game::{Game, GameState, next_active};
pub use options::{GameOptions, MAX_PLAYERS, TieBreak, WINNING_SCORE};
pub use player::Player;
pub use result::{PlayerRoundResult, RoundResult, Standing, TurnAction, TurnResult};
