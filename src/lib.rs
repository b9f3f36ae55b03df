//! The library components of the game. They hold the rules engine, and the terminal front-end that
//! draws the board and takes the players' input.
//!
//! The starting point of the rules is the engine.rs file, which can be driven by any presentation
//! layer; the starting point of the terminal game is the game.rs file, which contains the main loop.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

pub mod engine;
mod game;
mod input;
mod messages;

pub use game::init;
