//! Seeded pseudo-random integer sequences.
//!
//! A DJB2-style rolling hash turns a seed string into a reproducible
//! sequence of non-negative integers. Every artwork parameter downstream
//! is derived from this sequence, so the math here is pinned to 32-bit
//! signed wraparound semantics: the same seed must yield the same shapes
//! on every platform and in every build.

/// Minimum number of values a sequence is padded to.
pub const MIN_SEQUENCE_LEN: usize = 50;

/// Derive a sequence of at least [`MIN_SEQUENCE_LEN`] non-negative
/// integers from a seed string.
///
/// The hash walks the seed's UTF-16 code units (titles arrive in Latin,
/// German and Cyrillic scripts, occasionally with emoji) and emits one
/// value per three units, then pads with a counter-salted tail until the
/// minimum length is reached. All intermediate arithmetic wraps as
/// 32-bit signed; emitted values are the absolute magnitude of the
/// running hash.
///
/// Total function: the empty seed skips the scan entirely and is padded
/// to the full minimum length.
pub fn seeded_sequence(seed: &str) -> Vec<u32> {
    let mut h: i32 = 5381;
    let mut nums: Vec<u32> = Vec::with_capacity(MIN_SEQUENCE_LEN);

    for (i, unit) in seed.encode_utf16().enumerate() {
        h = h.wrapping_shl(5).wrapping_add(h).wrapping_add(i32::from(unit));
        if i % 3 == 2 {
            nums.push(h.unsigned_abs());
            h = h.wrapping_shl(7) ^ h;
        }
    }

    while nums.len() < MIN_SEQUENCE_LEN {
        let salt = (nums.len() as i32).wrapping_mul(7);
        h = h.wrapping_shl(5).wrapping_add(h).wrapping_add(salt);
        nums.push(h.unsigned_abs());
    }

    nums
}
