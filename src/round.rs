use crate::PROMPT;
use crate::players::Player;
use crate::rps::Verdict;
use std::io::Write;

/// One round: prompt, both decisions, resolution, report.
///
/// The user decides first. An unrecognized move ends the round before
/// the computer draws, and nothing past the prompt is written.
///
/// Output is plain text unless [`Round::colored`] opts in; the writer
/// may not be a terminal.
pub struct Round<U, C> {
    user: U,
    computer: C,
    color: bool,
}

impl<U, C> Round<U, C>
where
    U: Player,
    C: Player,
{
    pub fn new(user: U, computer: C) -> Self {
        Self {
            user,
            computer,
            color: false,
        }
    }

    /// Paint the closing remark with ANSI colors.
    pub fn colored(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn play<W>(&mut self, out: &mut W) -> anyhow::Result<Verdict>
    where
        W: Write,
    {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        let user = self.user.decide()?;
        let computer = self.computer.decide()?;
        let verdict = Verdict::new(user, computer);
        log::debug!("{:?}", verdict);
        writeln!(out)?;
        writeln!(out, "{}", verdict.echo())?;
        writeln!(out)?;
        match self.color {
            true => writeln!(out, "{} {}", verdict.matchup(), verdict.outcome().paint())?,
            false => writeln!(out, "{}", verdict)?,
        }
        out.flush()?;
        Ok(verdict)
    }
}
