//! Rules of Rock Paper Scissors.
//!
//! Three moves under cyclic dominance: rock smashes scissors, scissors cuts
//! paper, paper covers rock. Each move beats exactly one other and loses to
//! exactly one other, so resolving a pair needs only [`Move::beats`].
mod error;
mod moves;
mod outcome;
mod verdict;

pub use error::*;
pub use moves::*;
pub use outcome::*;
pub use verdict::*;
