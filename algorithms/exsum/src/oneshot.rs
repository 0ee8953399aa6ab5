//! One-shot entry points.

use crate::large::LargeAccumulator;
use crate::small::SmallAccumulator;

/// Crossover length at which the large accumulator's bucket fast path
/// overtakes the small accumulator's lower setup cost. Either side is
/// exact; the constant only tunes speed.
const LARGE_CUTOVER: usize = 256;

// =============================================================================
// ONE-SHOT SUMMATION
// =============================================================================

/// Exactly sum a slice of doubles.
///
/// Returns the true mathematical sum of `values` rounded once to the
/// nearest binary64 (ties to even) — bit-identical for every permutation
/// of the same inputs. IEEE-754 specials flow through: a lone signed
/// infinity wins, opposite infinities or any NaN input yield NaN. An
/// empty slice sums to `+0.0`.
///
/// # Example
/// ```rust
/// assert_eq!(exsum::sum(&[1.0, 1e100, 1.0, -1e100]), 2.0);
/// ```
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    if values.len() < LARGE_CUTOVER {
        let mut acc = SmallAccumulator::new();
        acc.add_slice(values);
        acc.round()
    } else {
        let mut acc = LargeAccumulator::new();
        acc.add_slice(values);
        acc.round()
    }
}

/// Exactly sum any iterable source of doubles.
///
/// Same contract as [`sum`], for inputs that are not contiguous in
/// memory. Only sequential read access is required.
///
/// # Example
/// ```rust
/// let total = exsum::sum_iter((1..=100).map(f64::from));
/// assert_eq!(total, 5050.0);
/// ```
pub fn sum_iter<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut acc = SmallAccumulator::new();
    acc.extend(values);
    acc.round()
}
