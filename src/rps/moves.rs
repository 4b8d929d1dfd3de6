use super::error::InvalidMove;
use rand::Rng;

/// A hand shape thrown in one round.
///
/// Discriminants follow the cycle: each move beats the one
/// two steps ahead of it (mod 3).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// All three moves in canonical order.
    pub const fn all() -> [Move; 3] {
        [Move::Rock, Move::Paper, Move::Scissors]
    }
    /// The single move this one defeats.
    pub const fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
    /// How this move defeats [`Move::beats`].
    pub fn verb(&self) -> &'static str {
        match self {
            Move::Rock => "smashes",
            Move::Paper => "covers",
            Move::Scissors => "cuts",
        }
    }
    /// Capitalized name, for the start of a sentence.
    pub fn title(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
    /// Uniform draw over the three moves.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::from(rng.random_range(0..3u8))
    }
}

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Move {
        match n {
            0 => Move::Rock,
            1 => Move::Paper,
            2 => Move::Scissors,
            _ => unreachable!("invalid move"),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// str isomorphism
///
/// Surrounding whitespace is ignored and matching is case-insensitive.
/// Nothing else is forgiven: abbreviations, plurals and typos are rejected.
impl TryFrom<&str> for Move {
    type Error = InvalidMove;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(InvalidMove(s.to_string())),
        }
    }
}
impl std::str::FromStr for Move {
    type Err = InvalidMove;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Move::Rock => write!(f, "rock"),
            Move::Paper => write!(f, "paper"),
            Move::Scissors => write!(f, "scissors"),
        }
    }
}
