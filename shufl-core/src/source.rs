use rand::rngs::StdRng;
use rand::SeedableRng;

/// Pseudo-random source owned by a single shuffler instance.
///
/// The generator is created on the first draw and evolves across calls for
/// the lifetime of the instance. A construction-time seed fixes the whole
/// sequence of draws; without one the source seeds itself from OS entropy.
pub struct RandomSource {
    seed: Option<u64>,
    rng: Option<StdRng>,
}

impl RandomSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed, rng: None }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        let seed = self.seed;
        self.rng.get_or_insert_with(|| match seed {
            Some(seed) => {
                log::debug!("seeding random source with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.rng.is_some()
    }
}
