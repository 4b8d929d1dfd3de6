use super::Player;
use crate::rps::Move;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Computer opponent drawing each move uniformly and independently.
///
/// Generic over the generator so rounds can be replayed from a seed.
#[derive(Debug)]
pub struct Robot<R = SmallRng> {
    rng: R,
}

impl<R: Rng> Robot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Robot<SmallRng> {
    /// Reproducible opponent.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

/// Seeded from the thread-local generator; fine for a cosmetic draw.
impl Default for Robot<SmallRng> {
    fn default() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Player for Robot<R> {
    fn decide(&mut self) -> anyhow::Result<Move> {
        let choice = Move::random(&mut self.rng);
        log::debug!("computer drew {}", choice);
        Ok(choice)
    }
}
