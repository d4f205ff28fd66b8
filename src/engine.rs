//! The random number engine.
//!
//! Mulberry32: a 32 bit counter advanced by a fixed odd increment, followed by
//! an avalanche mixing function. Since the state is a plain counter every one
//! of the 2^32 states is visited before the stream repeats, whatever the seed.

use crate::{
    entropy,
    hash::{self, hash_code_units},
    settings::{EngineSettings, Rounding},
};

/// Added to the state on every draw. Odd, so the counter has full period.
pub const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32 as a float, the divisor turning a `u32` into a float in [0, 1)
const U32_RANGE: f64 = 4_294_967_296.0;

/// A deterministic pseudo random number generator.
///
/// All randomness comes from [`Engine::next_u32`]; the methods in
/// [`distributions`](crate::distributions) are built on top of it. Cloning an
/// engine forks the stream: both copies will produce the same numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Engine {
    seed: u32,
    state: u32,
    rounding: Rounding,
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Engine {
    /// Create a new engine with the given seed and the default rounding.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            state: seed,
            rounding: Rounding::default(),
        }
    }
    /// Create a new engine seeded from a string generated from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(entropy::generate_seed(None))
    }
    /// Create a new engine with the hash of `text` as its seed.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(hash::hash(text))
    }
    /// Create a new engine from [`EngineSettings`]
    #[must_use]
    pub fn from_settings(settings: EngineSettings) -> Self {
        let mut engine = Self::new(settings.seed.resolve());
        engine.rounding = settings.rounding;
        engine
    }
    /// Derive a seed by hashing `text`, or a freshly generated random string
    /// if `text` is `None`.
    #[must_use]
    pub fn generate_seed(text: Option<&str>) -> u32 {
        entropy::generate_seed(text)
    }
    /// Generate `count` random characters from system entropy.
    #[must_use]
    pub fn generate_string(count: usize) -> String {
        entropy::generate_string(count)
    }

    /// Create an independent engine whose seed is derived from this engine's
    /// seed and `index`. The current state of `self` does not matter, so
    /// `fork(i)` gives the same child every time.
    #[must_use]
    pub fn fork(&self, index: u32) -> Self {
        let mut child = Self::new(hash_code_units([self.seed, index]));
        child.rounding = self.rounding;
        child
    }

    /// The seed this engine was created with.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }
    /// The current position in the stream.
    #[must_use]
    pub fn state(&self) -> u32 {
        self.state
    }
    /// Jump to a position in the stream. The next draw will be the same as for
    /// any other engine set to the same state.
    pub fn set_state(&mut self, state: u32) {
        self.state = state;
    }
    /// The rounding policy used for integer draws
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }
    #[allow(missing_docs)]
    pub fn set_rounding(&mut self, rounding: Rounding) {
        self.rounding = rounding;
    }

    /// Advance the state one step and return the mixed 32 bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        mix(self.state)
    }

    /// A uniform float in [0, 1). Exactly one step.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }

    /// A uniform float in [min, max). `min` and `max` may be given in any
    /// order; if they are equal the result is always `min`.
    #[inline]
    pub fn next(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }
}

/// The Mulberry32 output function
#[inline]
#[must_use]
pub fn mix(state: u32) -> u32 {
    let mut t = state;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    t ^ (t >> 14)
}
