use super::moves::Move;
use colored::ColoredString;
use colored::Colorize;

/// Result of a round from the user's seat.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Resolve `user` against `computer` by cyclic dominance.
    pub fn resolve(user: Move, computer: Move) -> Self {
        if user == computer {
            Outcome::Draw
        } else if user.beats() == computer {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
    /// Terminal rendering of the closing remark.
    pub fn paint(&self) -> ColoredString {
        match self {
            Outcome::Win => self.to_string().green(),
            Outcome::Lose => self.to_string().red(),
            Outcome::Draw => self.to_string().yellow(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "You win!"),
            Outcome::Lose => write!(f, "You lose."),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_moves_draw() {
        for m in Move::all() {
            assert_eq!(Outcome::resolve(m, m), Outcome::Draw);
        }
    }

    #[test]
    fn rock_beats_scissors() {
        assert_eq!(Outcome::resolve(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(Outcome::resolve(Move::Scissors, Move::Rock), Outcome::Lose);
    }

    #[test]
    fn scissors_beats_paper() {
        assert_eq!(Outcome::resolve(Move::Scissors, Move::Paper), Outcome::Win);
        assert_eq!(Outcome::resolve(Move::Paper, Move::Scissors), Outcome::Lose);
    }

    #[test]
    fn paper_beats_rock() {
        assert_eq!(Outcome::resolve(Move::Paper, Move::Rock), Outcome::Win);
        assert_eq!(Outcome::resolve(Move::Rock, Move::Paper), Outcome::Lose);
    }

    #[test]
    fn zero_sum_across_all_pairs() {
        for a in Move::all() {
            for b in Move::all() {
                let forward = Outcome::resolve(a, b);
                let reverse = Outcome::resolve(b, a);
                match forward {
                    Outcome::Win => assert_eq!(reverse, Outcome::Lose),
                    Outcome::Lose => assert_eq!(reverse, Outcome::Win),
                    Outcome::Draw => assert_eq!(reverse, Outcome::Draw),
                }
            }
        }
    }

    #[test]
    fn one_win_one_loss_one_draw_per_move() {
        for a in Move::all() {
            let outcomes = Move::all().map(|b| Outcome::resolve(a, b));
            assert!(outcomes.contains(&Outcome::Win));
            assert!(outcomes.contains(&Outcome::Lose));
            assert!(outcomes.contains(&Outcome::Draw));
        }
    }

    #[test]
    fn paint_keeps_text() {
        assert!(Outcome::Win.paint().to_string().contains("You win!"));
        assert!(Outcome::Lose.paint().to_string().contains("You lose."));
        assert!(Outcome::Draw.paint().to_string().contains("Draw!"));
    }
}
