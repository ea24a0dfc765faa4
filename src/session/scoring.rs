//! Score formula.
//!
//! `score = max(1000 - 10 * moves - floor(elapsed_ms / 1000), 100)`
//!
//! Deterministic in `(moves, elapsed_ms)` and non-increasing in both.

/// Score before any penalty.
pub const MAX_SCORE: u32 = 1000;

/// Score floor.
pub const MIN_SCORE: u32 = 100;

/// Penalty per completed move.
pub const MOVE_PENALTY: u64 = 10;

/// Compute the score for a finished (or in-progress) session.
///
/// ```
/// use memory_match::session::score;
///
/// assert_eq!(score(0, 0), 1000);
/// assert_eq!(score(50, 0), 500);
/// assert_eq!(score(0, 950_000), 100);
/// ```
#[must_use]
pub fn score(moves: u32, elapsed_ms: u64) -> u32 {
    let penalty = u64::from(moves)
        .saturating_mul(MOVE_PENALTY)
        .saturating_add(elapsed_ms / 1000);
    let raw = u64::from(MAX_SCORE).saturating_sub(penalty);
    raw.max(u64::from(MIN_SCORE)) as u32
}
