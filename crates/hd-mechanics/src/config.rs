//! Configuration for a game.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Largest pool accepted by default.
pub const DEFAULT_MAX_POOL: usize = 30;

/// Hard ceiling for `max_pool`, whatever the configuration asks for.
pub const MAX_POOL_LIMIT: usize = 1_000;

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Largest total dice count `setup` accepts, clamped to
    /// `1..=MAX_POOL_LIMIT` when a game is built.
    pub max_pool: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_pool: DEFAULT_MAX_POOL,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the largest pool (clamped to `1..=MAX_POOL_LIMIT`).
    pub fn with_max_pool(mut self, max_pool: usize) -> Self {
        self.max_pool = max_pool.clamp(1, MAX_POOL_LIMIT);
        self
    }

    /// Build the RNG this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
