//! Accumulator geometry constants.
//!
//! Everything here derives from the IEEE-754 binary64 field layout:
//!
//! ```text
//! bit 63    62..52          51..0
//!     sign  biased exponent mantissa
//! ```
//!
//! The small accumulator is a signed fixed-point register in base
//! `2^LOW_BITS`, wide enough that every finite binary64 value lands
//! entirely inside it: chunk 0 bit 0 carries weight `2^-LSB_WEIGHT`,
//! one binary place below the smallest denormal. The large accumulator
//! keys one 64-bit bucket per (sign, biased exponent) pair, i.e. per
//! distinct value of the top 12 bits of the binary64 representation.

// =============================================================================
// IEEE-754 BINARY64 FIELD LAYOUT
// =============================================================================

/// Width of the stored mantissa field.
pub const MANTISSA_BITS: u32 = 52;

/// Width of the biased exponent field.
pub const EXP_BITS: u32 = 11;

/// Mask for the biased exponent field, after the mantissa is shifted out.
pub const EXP_MASK: u64 = (1 << EXP_BITS) - 1;

/// Mask for the stored mantissa field.
pub const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;

/// The implicit leading bit carried by every normal number.
pub const IMPLICIT_BIT: u64 = 1 << MANTISSA_BITS;

/// Bit index of the sign.
pub const SIGN_BIT: u32 = 63;

/// Bit pattern of the quiet NaN produced when opposite infinities meet.
pub const CANONICAL_NAN: u64 = 0x7FF8_0000_0000_0000;

// =============================================================================
// SMALL ACCUMULATOR GEOMETRY
// =============================================================================

/// Exponent bits consumed by the intra-chunk bit offset.
pub const LOW_EXP_BITS: u32 = 5;

/// Value bits per chunk; the register radix is `2^LOW_BITS`.
pub const LOW_BITS: u32 = 1 << LOW_EXP_BITS;

/// Mask for a single radix digit.
pub const LOW_MASK: u128 = (1 << LOW_BITS) - 1;

/// Chunk count: one per 32-exponent band, plus three so that a mantissa
/// aligned at the top band still fits and carries have somewhere to go.
pub const SMALL_CHUNKS: usize = (1 << (EXP_BITS - LOW_EXP_BITS)) + 3;

/// Scalar adds allowed between carry-propagation passes.
///
/// A single add contributes at most one sub-`2^32` piece to each of
/// three adjacent chunks, so `2^31 - 1` adds on top of a canonical
/// chunk stay strictly inside a signed 64-bit chunk.
pub const SMALL_CARRY_TERMS: i32 = i32::MAX;

/// Negated weight exponent of chunk 0 bit 0 (`= EXP_BIAS + MANTISSA_BITS`):
/// a mantissa whose biased exponent is `e` has its least bit at absolute
/// register position `e`, worth `2^(e - LSB_WEIGHT)`.
pub const LSB_WEIGHT: i64 = 1075;

// =============================================================================
// LARGE ACCUMULATOR GEOMETRY
// =============================================================================

/// Bucket count: one per (sign, biased exponent) pair.
pub const LARGE_BUCKETS: usize = 1 << (EXP_BITS + 1);

/// Adds a bucket absorbs before its 64-bit slot could overflow: each add
/// deposits up to `2^53 - 1` mantissa-plus-implicit-bit, leaving
/// `2^(64 - 53) = 2048` guaranteed-safe additions.
pub const BUCKET_CAPACITY: i16 = 1 << (64 - MANTISSA_BITS - 1);

/// Counter sentinel marking an empty bucket slot.
pub const BUCKET_EMPTY: i16 = -1;

/// Words in the per-bucket liveness bitmap.
pub const USED_WORDS: usize = LARGE_BUCKETS / 64;
