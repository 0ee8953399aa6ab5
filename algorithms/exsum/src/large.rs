//! Large superaccumulator.
//!
//! An exponent-bucketed fast path over an embedded [`SmallAccumulator`].
//! The top 12 bits of each input (sign plus biased exponent) select one
//! of 4096 buckets, and the *entire* 64-bit representation is added into
//! the bucket's slot: every value landing in a bucket shares the same
//! top bits, so their replicated contribution is statically known and is
//! subtracted back out when the bucket is drained. The per-add cost is a
//! shift, a counter check, and one integer add; exponent alignment and
//! carry work happen only when a bucket fills (every 2048 same-bucket
//! adds) or at rounding time.

use crate::constants::{
    BUCKET_CAPACITY, BUCKET_EMPTY, EXP_BITS, EXP_MASK, LARGE_BUCKETS, MANTISSA_BITS, USED_WORDS,
};
use crate::small::SmallAccumulator;

// =============================================================================
// STATE
// =============================================================================

/// Exact accumulator optimized for bulk streams of binary64 values.
///
/// Same contract as [`SmallAccumulator`] — the represented value is the
/// exact sum of everything added — with a faster per-add path and a
/// rounding cost proportional to the number of distinct exponent buckets
/// touched. Roughly 40 KiB of state; box it if it must live on a small
/// stack.
#[derive(Clone)]
pub struct LargeAccumulator {
    /// Per-bucket 64-bit partial sums (valid only while the bucket is live).
    chunks: [u64; LARGE_BUCKETS],
    /// Per-bucket adds remaining before a drain; [`BUCKET_EMPTY`] when free.
    counts: [i16; LARGE_BUCKETS],
    /// One liveness bit per bucket.
    used: [u64; USED_WORDS],
    /// One bit per `used` word with any bit set; makes draining
    /// proportional to live buckets, not to 4096.
    used_summary: u64,
    /// Register holding everything drained so far.
    sacc: SmallAccumulator,
}

/// Re-align one live bucket's partial sum and add it into a small
/// accumulator. `chunk` still carries `n` replicated copies of the
/// bucket's sign+exponent top bits; they are subtracted out (mod 2^64)
/// before the implicit leading bits of normal values are restored.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn drain_bucket_into(sacc: &mut SmallAccumulator, index: usize, chunk: u64, count: i16) {
    let absorbed = (BUCKET_CAPACITY - count) as u64;
    let index = index as u64;

    let exp_field = index & EXP_MASK;
    let mantissa_sum = chunk.wrapping_sub(absorbed.wrapping_mul(index << MANTISSA_BITS));
    let (exp, magnitude) = if exp_field == 0 {
        // Denormal bucket: no implicit bits, effective exponent 1.
        (1, mantissa_sum)
    } else {
        (exp_field, mantissa_sum + (absorbed << MANTISSA_BITS))
    };

    sacc.add_aligned_budgeted(exp, magnitude, (index >> EXP_BITS) != 0);
}

/// Walk a two-level liveness bitmap, invoking `visit` for each live bucket.
fn for_each_live(mut summary: u64, used: &[u64; USED_WORDS], mut visit: impl FnMut(usize)) {
    while summary != 0 {
        let word_index = summary.trailing_zeros() as usize;
        summary &= summary - 1;
        let mut word = used[word_index];
        while word != 0 {
            let bit = word.trailing_zeros() as usize;
            word &= word - 1;
            visit((word_index << 6) | bit);
        }
    }
}

// =============================================================================
// ACCUMULATOR
// =============================================================================

impl LargeAccumulator {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create an accumulator holding exactly zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunks: [0; LARGE_BUCKETS],
            counts: [BUCKET_EMPTY; LARGE_BUCKETS],
            used: [0; USED_WORDS],
            used_summary: 0,
            sacc: SmallAccumulator::new(),
        }
    }

    /// Return the accumulator to the freshly-constructed zero state,
    /// clearing any latched infinity or NaN.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // =========================================================================
    // ACCUMULATION
    // =========================================================================

    /// Add a single value exactly.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add(&mut self, value: f64) {
        let bits = value.to_bits();
        let index = (bits >> MANTISSA_BITS) as usize;

        let count = self.counts[index] - 1;
        if count < 0 {
            self.add_slow(index, bits);
        } else {
            self.counts[index] = count;
            self.chunks[index] = self.chunks[index].wrapping_add(bits);
        }
    }

    /// Add every element of a slice exactly.
    pub fn add_slice(&mut self, values: &[f64]) {
        for &value in values {
            self.add(value);
        }
    }

    /// Off the fast path: infinity/NaN forwarding, first use of a bucket,
    /// or a bucket out of capacity that must be drained and restarted.
    fn add_slow(&mut self, index: usize, bits: u64) {
        if ((bits >> MANTISSA_BITS) & EXP_MASK) == EXP_MASK {
            self.sacc.add_special(bits);
            return;
        }
        if self.counts[index] >= 0 {
            drain_bucket_into(&mut self.sacc, index, self.chunks[index], self.counts[index]);
        } else {
            self.used[index >> 6] |= 1 << (index & 63);
            self.used_summary |= 1 << (index >> 6);
        }
        self.chunks[index] = bits;
        self.counts[index] = BUCKET_CAPACITY - 1;
    }

    /// Drain every live bucket into the embedded register. The value the
    /// accumulator represents is unchanged.
    fn drain(&mut self) {
        let used = self.used;
        for_each_live(self.used_summary, &used, |index| {
            drain_bucket_into(&mut self.sacc, index, self.chunks[index], self.counts[index]);
            self.counts[index] = BUCKET_EMPTY;
        });
        self.used = [0; USED_WORDS];
        self.used_summary = 0;
    }

    /// Add this accumulator's exact value into `target` without touching
    /// this accumulator: live buckets are read and re-aligned in place.
    fn transfer_into(&self, target: &mut SmallAccumulator) {
        for_each_live(self.used_summary, &self.used, |index| {
            drain_bucket_into(target, index, self.chunks[index], self.counts[index]);
        });
        target.merge(&self.sacc);
    }

    // =========================================================================
    // COMBINATION
    // =========================================================================

    /// Add another large accumulator's exact value into this one.
    ///
    /// `other` is left unchanged.
    pub fn merge(&mut self, other: &Self) {
        other.transfer_into(&mut self.sacc);
    }

    /// Add a small accumulator's exact value into this one.
    ///
    /// `other` is left unchanged.
    pub fn merge_small(&mut self, other: &SmallAccumulator) {
        self.sacc.merge(other);
    }

    // =========================================================================
    // ROUNDING
    // =========================================================================

    /// Round the accumulated sum to the nearest binary64, ties to even.
    ///
    /// Drains all live buckets into the embedded register first; the
    /// represented value is unchanged, so the call is idempotent and
    /// repeated calls return bit-identical results.
    pub fn round(&mut self) -> f64 {
        self.drain();
        self.sacc.round()
    }
}

impl SmallAccumulator {
    /// Add a large accumulator's exact value into this one.
    ///
    /// `other` is left unchanged.
    pub fn merge_large(&mut self, other: &LargeAccumulator) {
        other.transfer_into(self);
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for LargeAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for LargeAccumulator {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, values: T) {
        for value in values {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for LargeAccumulator {
    fn from_iter<T: IntoIterator<Item = f64>>(values: T) -> Self {
        let mut acc = Self::new();
        acc.extend(values);
        acc
    }
}

impl core::ops::AddAssign<f64> for LargeAccumulator {
    fn add_assign(&mut self, value: f64) {
        self.add(value);
    }
}
