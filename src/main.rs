//! # mathdice
//!
//! This crate is a two-player game about rolling a die and doing sums. Ones, twos and threes ask an
//! addition, a subtraction or a multiplication worth that many points, a four doubles the next
//! question, a five skips the turn, and a six puts the whole jackpot on a single question. Every
//! wrong answer feeds the jackpot. The first player to 20 points wins.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use mathdice::init;

fn main() -> Result<()> {
    init()
}
