//! Single-round Rock Paper Scissors against a randomly drawn opponent.
//!
//! ## Core Types
//!
//! - [`Move`] — One of rock, paper, scissors
//! - [`Outcome`] — Win, lose or draw from the user's seat
//! - [`Verdict`] — A resolved pair of moves and its matchup message
//! - [`InvalidMove`] — Raised when input names no move
//!
//! ## Players
//!
//! [`Player`] abstracts over where a move comes from. [`Human`] parses a line
//! of input, [`Robot`] draws uniformly at random, [`Script`] replays a fixed
//! sequence for deterministic play.
//!
//! ## Flow
//!
//! [`Round`] prompts, collects both decisions, resolves and renders.
pub mod players;
pub mod round;
pub mod rps;

pub use players::*;
pub use round::Round;
pub use rps::*;

// ============================================================================
// CONFIGURATION
// ============================================================================
/// Prompt written before reading the user's move.
pub const PROMPT: &str = "Enter your choice (rock, paper, scissors): ";
/// Terminal log threshold. Kept above Info so stdout carries only the game.
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr.
/// Nothing is written to disk; a round leaves no files behind.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        LOG_LEVEL,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
