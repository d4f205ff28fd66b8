//! String to seed hashing.
//!
//! A MurmurHash3 style mixer: every code unit is scrambled and folded into an
//! FNV offset basis, the length is mixed in and the result goes through the
//! 32 bit avalanche finalizer. The output is stable across platforms and
//! versions; changing it would change every stream seeded from text.

const INITIAL: u32 = 2_166_136_261;
const C1: u32 = 0xCC9E_2D51;
const C2: u32 = 0x1B87_3593;
const ROUND_ADD: u32 = 0xE654_6B64;

/// Hash the Unicode scalar values of `text` into a seed.
#[must_use]
pub fn hash(text: &str) -> u32 {
    hash_code_units(text.chars().map(u32::from))
}

/// Hash UTF-16 code units into a seed. For ASCII and other text in the basic
/// multilingual plane this gives the same result as [`hash`], but it also
/// accepts lone surrogates.
#[must_use]
pub fn hash_utf16(units: &[u16]) -> u32 {
    hash_code_units(units.iter().map(|&unit| u32::from(unit)))
}

/// Hash any sequence of code units. The length mixed into the hash is the
/// number of units, truncated to 32 bits.
pub fn hash_code_units<I: IntoIterator<Item = u32>>(units: I) -> u32 {
    let mut h = INITIAL;
    let mut len: u32 = 0;
    for unit in units {
        let mut k = unit.wrapping_mul(C1);
        k = k.rotate_left(15);
        k = k.wrapping_mul(C2);
        h ^= k;
        h = h.rotate_left(13);
        h = h.wrapping_mul(5).wrapping_add(ROUND_ADD);
        len = len.wrapping_add(1);
    }
    h ^= len;
    fmix32(h)
}

/// The MurmurHash3 32 bit finalizer
#[inline]
#[must_use]
pub fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}
