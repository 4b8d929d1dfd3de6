use super::Player;
use crate::rps::Move;

/// Replays a fixed sequence of moves, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct Script {
    moves: Vec<Move>,
    next: usize,
}

impl Script {
    pub fn new<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = Move>,
    {
        Self {
            moves: moves.into_iter().collect(),
            next: 0,
        }
    }
}

impl From<Move> for Script {
    fn from(m: Move) -> Self {
        Self::new([m])
    }
}

impl Player for Script {
    fn decide(&mut self) -> anyhow::Result<Move> {
        if self.moves.is_empty() {
            anyhow::bail!("script has no moves");
        }
        let choice = self.moves[self.next % self.moves.len()];
        self.next += 1;
        Ok(choice)
    }
}
