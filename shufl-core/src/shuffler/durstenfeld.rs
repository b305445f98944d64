use anyhow::Result;
use rand::Rng;

use crate::shuffler::Shuffler;
use crate::source::RandomSource;

/// Fisher-Yates in the Durstenfeld form: walk the sequence from the back and
/// swap each position with a uniformly drawn position at or below it. Given a
/// uniform generator, every permutation of the input is equally likely.
pub struct DurstenfeldShuffler {
    source: RandomSource,
}

impl DurstenfeldShuffler {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            source: RandomSource::new(seed),
        }
    }

    pub fn create(seed: Option<u64>) -> Self {
        Self::new(seed)
    }
}

impl Shuffler for DurstenfeldShuffler {
    fn shuffle(&mut self, items: &mut [String]) -> Result<()> {
        let rng = self.source.rng();
        for i in (1..items.len()).rev() {
            let j = rng.gen_range(0..=i);
            items.swap(i, j);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "durstenfeld"
    }
}
