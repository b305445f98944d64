use anyhow::Result;

use crate::shuffler::Shuffler;

/// Identity no-op, the negative control for the statistical harness.
pub struct DummyShuffler;

impl DummyShuffler {
    pub fn new() -> Self {
        Self
    }
}

impl Shuffler for DummyShuffler {
    fn shuffle(&mut self, _items: &mut [String]) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dummy"
    }
}
