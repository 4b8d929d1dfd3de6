use super::Player;
use crate::rps::Move;
use std::io::BufRead;

/// Interactive player reading one line per decision.
///
/// End of input reads as an empty line, and bytes that are not UTF-8 are
/// replaced before matching. Both are rejected like any other unrecognized
/// text.
#[derive(Debug)]
pub struct Human<R> {
    input: R,
}

impl<R: BufRead> Human<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Player for Human<R> {
    fn decide(&mut self) -> anyhow::Result<Move> {
        let ref mut buffer = Vec::new();
        self.input.read_until(b'\n', buffer)?;
        let line = String::from_utf8_lossy(buffer);
        log::debug!("user typed {:?}", line);
        Ok(line.parse::<Move>()?)
    }
}
