//! Exports the most often used parts of Mulberry

pub use crate::distributions::DEFAULT_MAX_ATTEMPTS;
pub use crate::engine::Engine;
pub use crate::settings::{EngineSettings, Rounding, SeedSource};
pub use crate::MulberryError;
