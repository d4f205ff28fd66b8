//! # Mulberry - deterministic seedable random numbers
//!
//! Mulberry is a small pseudo random number generator for when you need the
//! same stream of numbers every time: procedural content, simulations,
//! generative music, tests. A single 32 bit seed fully determines the output
//! of an [`Engine`], on every platform and in every run.
//!
//! Seeds can be given directly, derived from any string using a MurmurHash3
//! style mixing hash (see [`hash`]), or taken from system entropy when you
//! don't care which stream you get, but still want to be able to reproduce it
//! later through [`Engine::seed`].
//!
//! ```
//! use mulberry::prelude::*;
//!
//! let mut rng = Engine::from_text("level 1");
//! let x = rng.next(-1.0, 1.0);
//! let die = rng.next_int(1, 6, true);
//! let gauss = rng.next_normal(0.0, 1.0, 0.0);
//!
//! // The same text always gives the same stream
//! let mut again = Engine::from_text("level 1");
//! assert_eq!(again.next(-1.0, 1.0), x);
//! assert_eq!(again.next_int(1, 6, true), die);
//! assert_eq!(again.next_normal(0.0, 1.0, 0.0), gauss);
//! ```
//!
//! ## Architecture
//!
//! The core of Mulberry is the [`Engine`]: a 32 bit counter stepped by a
//! fixed odd increment and passed through an avalanche bit mixer (Mulberry32).
//! Every distribution in [`distributions`] is built on top of
//! [`Engine::next_f64`] and consumes a documented number of draws, so a
//! stream can be replayed exactly by repeating the same calls.
//!
//! Mulberry is NOT cryptographically secure.
//!
//! ## Features
//!
//! - *serde-derive*: Enables [`Engine`] and the settings types to be serialized/deserialized using serde.
//! - *rand-core*: Implements `rand_core::RngCore` and `rand_core::SeedableRng` for [`Engine`] so
//!   that it can drive anything in the `rand` ecosystem, e.g. shuffling slices.
//!
#![deny(rustdoc::broken_intra_doc_links)] // error if there are broken intra-doc links
#![warn(missing_docs)]

use std::num::ParseIntError;

pub mod distributions;
pub mod engine;
pub mod entropy;
pub mod hash;
pub mod prelude;
#[cfg(feature = "rand-core")]
mod rand_bridge;
pub mod settings;

pub use engine::Engine;
pub use settings::{EngineSettings, Rounding, SeedSource};

/// Combined error type for Mulberry. Drawing numbers never fails, these
/// errors only come from parsing configuration text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MulberryError {
    /// The name did not match any [`Rounding`] policy
    #[error("Unknown rounding policy \"{0}\", expected one of floor, ceil, trunc or round")]
    UnknownRounding(String),
    /// The seed literal was not a decimal or 0x prefixed hexadecimal u32
    #[error("Invalid seed literal \"{literal}\": {source}")]
    InvalidSeed {
        /// The text that failed to parse
        literal: String,
        /// The underlying integer parsing error
        source: ParseIntError,
    },
}
