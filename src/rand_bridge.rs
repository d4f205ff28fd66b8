//! `rand_core` implementations so that an [`Engine`] can be used wherever the
//! `rand` ecosystem expects a generator, e.g. `SliceRandom::shuffle`.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::Engine;

impl RngCore for Engine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Engine::next_u32(self)
    }

    /// Two steps, the first one becoming the low word.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Engine {
    /// The seed as little endian bytes
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Engine::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use rand_core::{RngCore, SeedableRng};

    use crate::Engine;

    #[test]
    fn core_output_matches_engine() {
        let mut a = Engine::new(12345);
        let mut b = Engine::new(12345);
        assert_eq!(RngCore::next_u32(&mut a), b.next_u32());
        let low = u64::from(b.next_u32());
        let high = u64::from(b.next_u32());
        assert_eq!(RngCore::next_u64(&mut a), (high << 32) | low);
    }

    #[test]
    fn seed_bytes_are_little_endian() {
        let rng = Engine::from_seed(12345u32.to_le_bytes());
        assert_eq!(rng.seed(), 12345);
    }

    #[test]
    fn fill_bytes_uses_output_words() {
        let mut a = Engine::new(9);
        let mut b = Engine::new(9);
        let mut bytes = [0u8; 8];
        a.fill_bytes(&mut bytes);
        let mut expected = Vec::new();
        expected.extend_from_slice(&b.next_u32().to_le_bytes());
        expected.extend_from_slice(&b.next_u32().to_le_bytes());
        assert_eq!(bytes.as_slice(), expected.as_slice());
    }
}
