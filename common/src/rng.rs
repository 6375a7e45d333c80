use log::debug;
use rand::prelude::{SeedableRng, StdRng};

/// Creates a reproducible generator when a seed is given, otherwise one seeded from entropy.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Creating rng from seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
