//! Roshambo Binary
//!
//! Reads one move from stdin, plays it against a random draw, prints the verdict.
//! Exits non-zero on an unrecognized move.
use roshambo::*;
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    roshambo::log()?;
    let ref mut out = std::io::stdout().lock();
    let user = Human::new(std::io::stdin().lock());
    let computer: Robot = Robot::default();
    let color = std::io::stdout().is_terminal();
    let verdict = Round::new(user, computer).colored(color).play(out)?;
    log::debug!("round finished: {:?}", verdict.outcome());
    Ok(())
}
