//! Shared public types.

use crate::large::LargeAccumulator;
use crate::small::SmallAccumulator;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// =============================================================================
// TAGGED ACCUMULATOR
// =============================================================================

/// Either accumulator kind behind one tagged type.
///
/// Callers that know the kind statically should use
/// [`SmallAccumulator`] / [`LargeAccumulator`] directly; this wrapper
/// exists for boundaries where the kind is chosen at runtime. The large
/// variant is boxed — its bucket state is around 40 KiB.
#[derive(Clone)]
pub enum Accumulator {
    /// Small superaccumulator: cheap to create, merge, and round.
    Small(SmallAccumulator),
    /// Large superaccumulator: fastest per-add path for bulk streams.
    Large(Box<LargeAccumulator>),
}

impl Accumulator {
    /// Create a small-kind accumulator holding exactly zero.
    #[must_use]
    pub const fn small() -> Self {
        Self::Small(SmallAccumulator::new())
    }

    /// Create a large-kind accumulator holding exactly zero.
    #[must_use]
    pub fn large() -> Self {
        Self::Large(Box::new(LargeAccumulator::new()))
    }

    /// Add a single value exactly.
    pub fn add(&mut self, value: f64) {
        match self {
            Self::Small(acc) => acc.add(value),
            Self::Large(acc) => acc.add(value),
        }
    }

    /// Add every element of a slice exactly.
    pub fn add_slice(&mut self, values: &[f64]) {
        match self {
            Self::Small(acc) => acc.add_slice(values),
            Self::Large(acc) => acc.add_slice(values),
        }
    }

    /// Add another accumulator's exact value into this one, for any
    /// combination of kinds. `other` is left unchanged.
    pub fn merge(&mut self, other: &Self) {
        match (self, other) {
            (Self::Small(dst), Self::Small(src)) => dst.merge(src),
            (Self::Small(dst), Self::Large(src)) => dst.merge_large(src),
            (Self::Large(dst), Self::Small(src)) => dst.merge_small(src),
            (Self::Large(dst), Self::Large(src)) => dst.merge(src),
        }
    }

    /// Round the accumulated sum to the nearest binary64, ties to even.
    ///
    /// Idempotent: repeated calls return bit-identical results.
    pub fn round(&mut self) -> f64 {
        match self {
            Self::Small(acc) => acc.round(),
            Self::Large(acc) => acc.round(),
        }
    }
}

impl Extend<f64> for Accumulator {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, values: T) {
        match self {
            Self::Small(acc) => acc.extend(values),
            Self::Large(acc) => acc.extend(values),
        }
    }
}
