//! Deterministic, seeded, non-cryptographic hashing of shingles.
//!
//! Built on MurmurHash3 (x86_32 for 32-bit, x64_128 for 64- and 128-bit),
//! the same family the reference implementation uses. Hash values are
//! returned sign-extended into `i128` so every bit-width shares one ordered
//! type; two's-complement sign-extension preserves the natural signed
//! ordering of the narrower width, so `hash_bits` only changes which bits
//! feed the comparison, never how they compare.

use crate::config::HashBits;

/// Hash `bytes` under `seed`, at the requested bit width, returning the
/// sign-extended value as an `i128`.
///
/// For [`HashBits::Bits64`] the low 64 bits of the x64_128 hash are used, per
/// the reference behavior; for [`HashBits::Bits128`] both 64-bit words are
/// combined into one 128-bit value.
#[must_use]
pub fn hash_shingle(bytes: &[u8], seed: u32, bits: HashBits) -> i128 {
    match bits {
        HashBits::Bits32 => {
            let h = murmurhash3::murmurhash3_x86_32(bytes, seed);
            i128::from(h as i32)
        }
        HashBits::Bits64 => {
            let (h1, _h2) = murmurhash3::murmurhash3_x64_128(bytes, seed);
            i128::from(h1 as i64)
        }
        HashBits::Bits128 => {
            let (h1, h2) = murmurhash3::murmurhash3_x64_128(bytes, seed);
            let combined = (u128::from(h1) << 64) | u128::from(h2);
            combined as i128
        }
    }
}
