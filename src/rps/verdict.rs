use super::moves::Move;
use super::outcome::Outcome;

/// A resolved round: both moves and what they add up to.
///
/// The matchup message always leads with the winning move, whichever
/// seat threw it, e.g. "Paper covers rock!".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    user: Move,
    computer: Move,
    outcome: Outcome,
}

impl Verdict {
    pub fn new(user: Move, computer: Move) -> Self {
        Self {
            user,
            computer,
            outcome: Outcome::resolve(user, computer),
        }
    }
    pub fn user(&self) -> Move {
        self.user
    }
    pub fn computer(&self) -> Move {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    /// The winning move, if the round was not a draw.
    pub fn winner(&self) -> Option<Move> {
        match self.outcome {
            Outcome::Win => Some(self.user),
            Outcome::Lose => Some(self.computer),
            Outcome::Draw => None,
        }
    }
    /// Description of what happened, without the closing remark.
    pub fn matchup(&self) -> String {
        match self.winner() {
            Some(winner) => format!("{} {} {}!", winner.title(), winner.verb(), winner.beats()),
            None => format!("Both players selected {}.", self.user),
        }
    }
    /// Echo of both choices.
    pub fn echo(&self) -> String {
        format!("You chose {}, computer chose {}.", self.user, self.computer)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.matchup(), self.outcome)
    }
}
