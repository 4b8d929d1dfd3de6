//! Where moves come from.
//!
//! Concrete types implementing [`Player`], providing different sources
//! for a round's decision.
//!
//! ## Implementations
//!
//! - [`Human`] — Parses one line of text input
//! - [`Robot`] — Uniform random draw from a non-cryptographic PRNG
//! - [`Script`] — Replays a fixed sequence, for deterministic play
mod human;
mod robot;
mod script;

pub use human::*;
pub use robot::*;
pub use script::*;

use crate::rps::Move;

/// A source of moves.
pub trait Player {
    /// Commit to a move for the current round.
    fn decide(&mut self) -> anyhow::Result<Move>;
}
