//! Deferred resolutions.
//!
//! A turn's outcome is applied after a reveal delay. Rather than holding
//! callbacks, the resolver emits `ScheduledResolution` values tagged with the
//! session generation; the host replays them when the delay elapses, or lets
//! the game drain them from its `ResolutionQueue`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Generation};

/// What a resolution will do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairOutcome {
    /// Same token: lock both cards.
    Match,
    /// Different tokens: hide both cards.
    Mismatch,
}

/// A resolution waiting for its reveal delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledResolution {
    /// Session that scheduled this task.
    pub generation: Generation,

    /// The two selected cards, in click order.
    pub cards: [CardId; 2],

    /// Judged outcome.
    pub outcome: PairOutcome,

    /// Earliest time (ms) the task may fire.
    pub due_at_ms: u64,
}

impl ScheduledResolution {
    /// Has the delay elapsed at `now_ms`?
    #[must_use]
    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.due_at_ms
    }
}

/// FIFO of pending resolutions.
///
/// The selection guard means at most one task is pending per session, but
/// the queue does not rely on that.
#[derive(Clone, Debug, Default)]
pub struct ResolutionQueue {
    pending: VecDeque<ScheduledResolution>,
}

impl ResolutionQueue {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task.
    pub fn push(&mut self, task: ScheduledResolution) {
        self.pending.push_back(task);
    }

    /// Every task due at `now_ms`, in schedule order. Tasks stay queued
    /// until resolved.
    #[must_use]
    pub fn due(&self, now_ms: u64) -> Vec<ScheduledResolution> {
        self.pending.iter().filter(|t| t.is_due(now_ms)).copied().collect()
    }

    /// Is this exact task waiting?
    #[must_use]
    pub fn contains(&self, task: &ScheduledResolution) -> bool {
        self.pending.contains(task)
    }

    /// Drop a specific task once it has resolved.
    pub fn remove(&mut self, task: &ScheduledResolution) {
        self.pending.retain(|t| t != task);
    }

    /// Earliest due time among pending tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.due_at_ms).min()
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Is anything pending?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Discard all pending tasks.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(due: u64) -> ScheduledResolution {
        ScheduledResolution {
            generation: Generation::initial(),
            cards: [CardId(0), CardId(1)],
            outcome: PairOutcome::Mismatch,
            due_at_ms: due,
        }
    }

    #[test]
    fn test_due() {
        let mut q = ResolutionQueue::new();
        q.push(task(500));
        q.push(task(1500));

        assert!(q.due(100).is_empty());
        assert_eq!(q.next_due(), Some(500));

        assert_eq!(q.due(500), vec![task(500)]);
        assert_eq!(q.len(), 2);
        assert_eq!(q.due(10_000), vec![task(500), task(1500)]);

        q.remove(&task(500));
        q.remove(&task(1500));
        assert!(q.is_empty());
        assert_eq!(q.next_due(), None);
    }

    #[test]
    fn test_contains_is_exact() {
        let mut q = ResolutionQueue::new();
        q.push(task(500));

        assert!(q.contains(&task(500)));
        assert!(!q.contains(&task(499)));

        let mut altered = task(500);
        altered.outcome = PairOutcome::Match;
        assert!(!q.contains(&altered));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut q = ResolutionQueue::new();
        q.push(task(1));
        q.push(task(2));

        q.remove(&task(1));
        assert_eq!(q.len(), 1);

        q.clear();
        assert!(q.is_empty());
    }
}
