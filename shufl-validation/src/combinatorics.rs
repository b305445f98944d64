use crate::{Error, Result};

/// Number of distinct orderings of a sequence of length `n`, i.e. `n!`.
/// Lengths above 20 overflow u64 and are rejected.
pub fn permutation_count(n: usize) -> Result<u64> {
  let mut count: u64 = 1;
  for k in 2..=(n as u64) {
      count = count.checked_mul(k).ok_or(Error::TooManyPermutations(n))?;
  }
  Ok(count)
}

/// Multiple of `divisor` nearest to `target`. `divisor` must be non-zero.
///
/// The near candidate comes from truncating division; the far candidate is
/// one multiple further from zero, picked by the sign of `target * divisor`.
/// Ties go to the far candidate. The sign product is evaluated at 128 bits
/// so it is defined for the whole i64 domain.
pub fn closest_divisible(target: i64, divisor: i64) -> i64 {
  let q = target / divisor;
  let n1 = divisor * q;
  let n2 = if (target as i128) * (divisor as i128) > 0 {
      divisor * (q + 1)
  } else {
      divisor * (q - 1)
  };
  if (target - n1).abs() < (target - n2).abs() {
      n1
  } else {
      n2
  }
}
