//! Configuration for creating an [`Engine`](crate::Engine).
//!
//! ```
//! use mulberry::prelude::*;
//!
//! let rng = Engine::from_settings(EngineSettings {
//!     seed: SeedSource::Text("my world".into()),
//!     rounding: Rounding::Floor,
//! });
//! assert_eq!(rng.seed(), mulberry::hash::hash("my world"));
//! ```

use std::{fmt, str::FromStr};

use crate::{entropy, hash, MulberryError};

/// How a float is turned into an integer by the integer drawing methods.
/// Configured per [`Engine`](crate::Engine) so that all integer draws from one
/// engine are rounded the same way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Towards negative infinity
    Floor,
    /// Towards positive infinity
    Ceil,
    /// Towards zero
    #[default]
    Truncate,
    /// To the nearest integer, halfway cases away from zero
    Round,
}

impl Rounding {
    /// Apply the policy. The result is still a float so that NaN and the
    /// infinities pass through unchanged.
    #[inline]
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Floor => value.floor(),
            Rounding::Ceil => value.ceil(),
            Rounding::Truncate => value.trunc(),
            Rounding::Round => value.round(),
        }
    }
    /// The canonical lower case name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rounding::Floor => "floor",
            Rounding::Ceil => "ceil",
            Rounding::Truncate => "trunc",
            Rounding::Round => "round",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rounding {
    type Err = MulberryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floor" => Ok(Rounding::Floor),
            "ceil" | "ceiling" => Ok(Rounding::Ceil),
            "trunc" | "truncate" => Ok(Rounding::Truncate),
            "round" => Ok(Rounding::Round),
            _ => Err(MulberryError::UnknownRounding(s.to_owned())),
        }
    }
}

/// Where the seed of a new [`Engine`](crate::Engine) comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum SeedSource {
    /// Hash a randomly generated string. Not reproducible unless the resulting
    /// seed is recorded.
    #[default]
    Entropy,
    /// Use this exact seed
    Value(u32),
    /// Hash this text
    Text(String),
}

impl SeedSource {
    /// Produce the seed. Only [`SeedSource::Entropy`] is non deterministic.
    #[must_use]
    pub fn resolve(&self) -> u32 {
        match self {
            SeedSource::Entropy => entropy::generate_seed(None),
            SeedSource::Value(seed) => *seed,
            SeedSource::Text(text) => {
                let seed = hash::hash(text);
                tracing::debug!(seed, text = text.as_str(), "derived seed from text");
                seed
            }
        }
    }

    /// Parse a seed literal, either decimal or hexadecimal with a `0x` prefix.
    ///
    /// # Errors
    /// If the literal is not a valid `u32`.
    pub fn parse_literal(literal: &str) -> Result<Self, MulberryError> {
        let trimmed = literal.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => trimmed.parse::<u32>(),
        };
        parsed
            .map(SeedSource::Value)
            .map_err(|source| MulberryError::InvalidSeed {
                literal: literal.to_owned(),
                source,
            })
    }
}

impl From<u32> for SeedSource {
    fn from(seed: u32) -> Self {
        SeedSource::Value(seed)
    }
}

impl From<&str> for SeedSource {
    fn from(text: &str) -> Self {
        SeedSource::Text(text.to_owned())
    }
}

/// Settings used to initialise an [`Engine`](crate::Engine).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSettings {
    /// Where the seed comes from. Defaults to system entropy.
    pub seed: SeedSource,
    /// Rounding used by the integer drawing methods. Defaults to [`Rounding::Truncate`].
    pub rounding: Rounding,
}
