#![cfg_attr(not(feature = "std"), no_std)]

//! # Exsum
//!
//! Exact summation of IEEE-754 binary64 sequences using small and large
//! superaccumulators.
//!
//! The accumulators hold the *exact* running sum in wide fixed-point
//! state, so rounding happens once, at the end: the result equals the
//! true mathematical sum rounded to the nearest double, regardless of
//! ordering, cancellation, or magnitude spread. Infinities and NaNs
//! propagate per IEEE-754.

//! # Usage
//! ```rust
//! // 1. One-shot exact sum (naive summation returns 0.0 here)
//! let total = exsum::sum(&[1.0, 1e100, 1.0, -1e100]);
//! assert_eq!(total, 2.0);
//!
//! // 2. Streaming accumulation (bulk data)
//! use exsum::LargeAccumulator;
//!
//! let mut acc = LargeAccumulator::new();
//! acc.add_slice(&[0.1; 10]);
//! assert_eq!(acc.round(), 1.0);
//!
//! // 3. Split, then merge — bit-identical to a single pass
//! use exsum::SmallAccumulator;
//!
//! let mut left = SmallAccumulator::new();
//! let mut right = SmallAccumulator::new();
//! left.add(f64::EPSILON);
//! right.add(1.0);
//! left.merge(&right);
//! assert_eq!(left.round(), 1.0 + f64::EPSILON);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod constants;
mod large;
mod oneshot;
mod small;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use large::LargeAccumulator;
pub use oneshot::{sum, sum_iter};
pub use small::SmallAccumulator;
pub use types::Accumulator;
