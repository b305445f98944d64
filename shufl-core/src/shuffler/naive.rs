use anyhow::Result;
use rand::Rng;

use crate::shuffler::Shuffler;
use crate::source::RandomSource;

/// Biased variant kept as the known-bad reference for the statistical
/// harness: every position swaps with an index drawn from the full range, so
/// the n^n draw sequences spread unevenly over the n! permutations for n > 2.
///
/// Never served at the request boundary.
pub struct NaiveShuffler {
    source: RandomSource,
}

impl NaiveShuffler {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            source: RandomSource::new(seed),
        }
    }

    pub fn create(seed: Option<u64>) -> Self {
        Self::new(seed)
    }
}

impl Shuffler for NaiveShuffler {
    fn shuffle(&mut self, items: &mut [String]) -> Result<()> {
        let rng = self.source.rng();
        for i in 0..items.len() {
            let r = rng.gen_range(0..items.len());
            items.swap(r, i);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}
