use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use super::*;

/// Uniform placement over every cell outside the first-click safe zone.
///
/// The candidate cells are enumerated up front and sampled without
/// replacement, so placement always terminates.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: BoardConfig, first_click: Coord2) -> Vec<Coord2> {
        let (rows, cols) = config.size();
        let candidates: Vec<Coord2> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&coords| !within_one(coords, first_click))
            .collect();

        let wanted = usize::from(config.mines);
        if wanted > candidates.len() {
            log::warn!(
                "Minefield already full, requested {} but only {} cells are eligible",
                wanted,
                candidates.len()
            );
        }

        log::debug!("Generating {} mines with seed {}", wanted, self.seed);
        candidates
            .choose_multiple(&mut self.rng, wanted)
            .copied()
            .collect()
    }
}
