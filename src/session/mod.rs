//! Session tracking and scoring.

mod scoring;
mod tracker;

pub use scoring::{score, MAX_SCORE, MIN_SCORE, MOVE_PENALTY};
pub use tracker::SessionTracker;
