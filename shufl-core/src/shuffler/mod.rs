pub mod dummy;
pub mod durstenfeld;
pub mod naive;

use anyhow::Result;

/// A permutation generator over sequences of string tokens.
///
/// Implementations reorder the slice in place and never add or drop tokens.
/// Each instance owns its random source; calls on one instance draw from a
/// single evolving generator.
pub trait Shuffler: Send {
    fn shuffle(&mut self, items: &mut [String]) -> Result<()>;
    fn name(&self) -> &'static str;
}
