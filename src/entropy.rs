//! Unpredictable seed material.
//!
//! When no seed is given an [`Engine`](crate::Engine) still needs one. These
//! functions produce a random string from system entropy and hash it. Nothing
//! in this module is reproducible; record [`Engine::seed`](crate::Engine::seed)
//! if you need to replay the stream later.

use crate::hash::hash;

/// Number of characters generated when no length is given.
pub const DEFAULT_STRING_LENGTH: usize = 32;

/// The largest character that can be generated, i.e. the last code point
/// below 2^16. Surrogates in between are skipped since they are not valid
/// `char`s.
const MAX_CHAR: char = '\u{FFFF}';

/// Generate `count` random characters using the thread local `fastrand`
/// generator, which is seeded from system entropy.
#[must_use]
pub fn generate_string(count: usize) -> String {
    (0..count).map(|_| fastrand::char('\0'..=MAX_CHAR)).collect()
}

/// Generate `count` random characters from the given generator.
#[must_use]
pub fn generate_string_with(rng: &mut fastrand::Rng, count: usize) -> String {
    (0..count).map(|_| rng.char('\0'..=MAX_CHAR)).collect()
}

/// Hash `text` into a seed, or a freshly generated string of
/// [`DEFAULT_STRING_LENGTH`] characters if `text` is `None`.
#[must_use]
pub fn generate_seed(text: Option<&str>) -> u32 {
    match text {
        Some(text) => hash(text),
        None => {
            let seed = hash(&generate_string(DEFAULT_STRING_LENGTH));
            tracing::debug!(seed, "derived seed from system entropy");
            seed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_length_is_in_chars() {
        assert_eq!(generate_string(0), "");
        assert_eq!(generate_string(32).chars().count(), 32);
        assert_eq!(generate_string(7).chars().count(), 7);
    }

    #[test]
    fn characters_stay_below_u16_range() {
        let mut rng = fastrand::Rng::with_seed(94);
        let s = generate_string_with(&mut rng, 10_000);
        assert!(s.chars().all(|c| u32::from(c) < 0x1_0000));
        // The range is wide, so a long string has plenty of distinct characters
        let mut distinct: Vec<char> = s.chars().collect();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() > 8500);
    }

    #[test]
    fn seeded_generator_is_repeatable() {
        let a = generate_string_with(&mut fastrand::Rng::with_seed(53), 16);
        let b = generate_string_with(&mut fastrand::Rng::with_seed(53), 16);
        assert_eq!(a, b);
    }

    #[test]
    fn explicit_text_is_hashed() {
        assert_eq!(generate_seed(Some("seed")), 246_123_560);
        assert_eq!(generate_seed(Some("seed")), generate_seed(Some("seed")));
    }

    #[test]
    fn entropy_seeds_differ() {
        // Two 32 character strings colliding in the hash is vanishingly unlikely
        let seeds: Vec<u32> = (0..8).map(|_| generate_seed(None)).collect();
        let mut unique = seeds.clone();
        unique.sort_unstable();
        unique.dedup();
        assert!(unique.len() > 1);
    }
}
