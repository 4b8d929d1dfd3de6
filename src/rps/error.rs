/// Input that names none of the three moves.
///
/// Carries the text as received (before trimming) so the report shows
/// exactly what was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMove(pub String);

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "invalid move {:?} (expected rock, paper, or scissors)",
            self.0.trim()
        )
    }
}

impl std::error::Error for InvalidMove {}
