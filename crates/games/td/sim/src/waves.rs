use crate::config::EnemyKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces each wave's enemy lineup.
///
/// Waves 1-21 come from a fixed table; after that the generator switches to
/// seeded random composition. The switch is one-way: once random, the table
/// is never consulted again, whatever wave index is asked for.
#[derive(Clone, Debug)]
pub struct WaveGenerator {
    rng: StdRng,
    randomized: bool,
}

impl WaveGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            randomized: false,
        }
    }

    /// Compose the lineup for `wave` (1-based), in release order.
    pub fn compose(&mut self, wave: u32) -> Vec<EnemyKind> {
        if wave > 21 {
            self.randomized = true;
        }
        if self.randomized {
            return self.random_lineup();
        }

        let (runts, knights, brutes) = if wave <= 11 {
            let knights = wave.saturating_sub(1) as u16;
            (10 - knights, knights, 0)
        } else {
            let brutes = (wave - 11) as u16;
            (0, 10 - brutes, brutes)
        };

        let mut lineup = Vec::with_capacity((runts + knights + brutes) as usize);
        lineup.extend(std::iter::repeat(EnemyKind::Runt).take(runts as usize));
        lineup.extend(std::iter::repeat(EnemyKind::Knight).take(knights as usize));
        lineup.extend(std::iter::repeat(EnemyKind::Brute).take(brutes as usize));
        lineup
    }

    fn random_lineup(&mut self) -> Vec<EnemyKind> {
        let total = 10 + self.rng.gen_range(0, 6);
        (0..total)
            .map(|_| match self.rng.gen_range(0, 3) {
                0 => EnemyKind::Runt,
                1 => EnemyKind::Knight,
                _ => EnemyKind::Brute,
            })
            .collect()
    }
}
