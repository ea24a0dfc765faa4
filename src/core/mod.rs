//! Core engine types: ids, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by every other module.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{CardId, Generation};
pub use rng::GameRng;
pub use config::{Difficulty, DifficultyConfig, GameConfig, TimingConfig, DEFAULT_CONTENT_ID};
pub use error::{ConfigError, Result};
