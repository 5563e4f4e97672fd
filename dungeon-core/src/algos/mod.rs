mod map_builder;

pub use map_builder::{ConfigError, GenerationReport, GeneratorConfig, MapGenerator};

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{SeedableRng, rngs::StdRng};

pub(crate) struct RngHandler;

impl RngHandler {
    pub fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    // Only used when the caller did not pick a seed.
    pub fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    }
}
