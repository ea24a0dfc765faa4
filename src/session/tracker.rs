//! Session progress: moves, matches, time, win state.

use serde::{Deserialize, Serialize};

use super::scoring::score;

/// Tracks one playthrough from first click to win.
///
/// ## Invariants
///
/// - `0 <= matched_pairs <= pair_count`
/// - `won` iff `matched_pairs == pair_count`
/// - `started` never reverts; a new session gets a new tracker
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTracker {
    pair_count: usize,
    moves: u32,
    matched_pairs: usize,
    started: bool,
    won: bool,
    start_ms: Option<u64>,
    elapsed_ms: u64,
    final_score: Option<u32>,
}

impl SessionTracker {
    /// Fresh tracker for a deck of `pair_count` pairs.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            moves: 0,
            matched_pairs: 0,
            started: false,
            won: false,
            start_ms: None,
            elapsed_ms: 0,
            final_score: None,
        }
    }

    /// Mark the session started. Only the first call records a timestamp.
    ///
    /// Returns true if this call started the session.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.start_ms = Some(now_ms);
        true
    }

    /// Count one completed selection pair.
    pub fn on_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    /// Recompute elapsed time. No-op before start or after the win.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.started || self.won {
            return;
        }
        if let Some(start) = self.start_ms {
            self.elapsed_ms = now_ms.saturating_sub(start);
        }
    }

    /// Count one matched pair.
    ///
    /// Returns true exactly once: on the call that makes the session won.
    /// That call freezes elapsed time at `now_ms` and fixes the final score.
    pub fn on_match(&mut self, now_ms: u64) -> bool {
        if self.won {
            return false;
        }
        self.matched_pairs = (self.matched_pairs + 1).min(self.pair_count);
        if self.matched_pairs < self.pair_count {
            return false;
        }

        self.tick(now_ms);
        self.won = true;
        self.final_score = Some(score(self.moves, self.elapsed_ms));
        true
    }

    /// Moves made so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Has the first click happened?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Are all pairs matched?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Timestamp of the first click.
    #[must_use]
    pub fn start_ms(&self) -> Option<u64> {
        self.start_ms
    }

    /// Elapsed time as of the last tick.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Score fixed at the win, if won.
    #[must_use]
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Live score for display.
    #[must_use]
    pub fn current_score(&self) -> u32 {
        self.final_score
            .unwrap_or_else(|| score(self.moves, self.elapsed_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_once() {
        let mut t = SessionTracker::new(2);
        assert!(!t.is_started());

        assert!(t.start(1_000));
        assert!(!t.start(5_000));
        assert_eq!(t.start_ms(), Some(1_000));
    }

    #[test]
    fn test_tick_only_while_active() {
        let mut t = SessionTracker::new(1);
        t.tick(10_000);
        assert_eq!(t.elapsed_ms(), 0);

        t.start(1_000);
        t.tick(3_500);
        assert_eq!(t.elapsed_ms(), 2_500);

        t.on_move();
        assert!(t.on_match(4_000));
        assert_eq!(t.elapsed_ms(), 3_000);

        t.tick(60_000);
        assert_eq!(t.elapsed_ms(), 3_000);
    }

    #[test]
    fn test_win_is_idempotent() {
        let mut t = SessionTracker::new(2);
        t.start(0);
        t.on_move();
        assert!(!t.on_match(500));
        t.on_move();
        assert!(t.on_match(2_000));

        assert!(t.is_won());
        assert_eq!(t.matched_pairs(), 2);
        let score = t.final_score();
        assert_eq!(score, Some(1000 - 20 - 2));

        assert!(!t.on_match(90_000));
        assert_eq!(t.matched_pairs(), 2);
        assert_eq!(t.final_score(), score);
    }

    #[test]
    fn test_current_score_tracks_progress() {
        let mut t = SessionTracker::new(3);
        t.start(0);
        assert_eq!(t.current_score(), 1000);

        t.on_move();
        t.tick(5_000);
        assert_eq!(t.current_score(), 1000 - 10 - 5);
    }

    #[test]
    fn test_clock_going_backwards_saturates() {
        let mut t = SessionTracker::new(1);
        t.start(10_000);
        t.tick(5_000);
        assert_eq!(t.elapsed_ms(), 0);
    }
}
