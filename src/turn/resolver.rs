//! Turn resolver state machine.
//!
//! ```text
//!   Idle --click--> OneSelected --click--> Resolving --delay--> Idle
//! ```
//!
//! The phase is derived from the selection length, so it cannot disagree
//! with the selection. A full selection rejects further clicks; that guard
//! alone keeps a third card from being revealed mid-turn.

use crate::cards::CardStore;
use crate::core::{CardId, Generation, TimingConfig};
use crate::session::SessionTracker;

use super::schedule::{PairOutcome, ResolutionQueue, ScheduledResolution};
use super::selection::Selection;
use super::{ClickOutcome, IgnoreReason, ResolveOutcome, TurnPhase};

/// Selection and deferred resolution for one session.
#[derive(Clone, Debug)]
pub struct TurnResolver {
    generation: Generation,
    timing: TimingConfig,
    selection: Selection,
    queue: ResolutionQueue,
}

impl TurnResolver {
    /// Resolver for the session identified by `generation`.
    #[must_use]
    pub fn new(generation: Generation, timing: TimingConfig) -> Self {
        Self {
            generation,
            timing,
            selection: Selection::new(),
            queue: ResolutionQueue::new(),
        }
    }

    /// Handle a click intent on card `id`.
    ///
    /// Invalid clicks are ignored without touching any state.
    pub fn select(
        &mut self,
        store: &mut CardStore,
        tracker: &mut SessionTracker,
        id: CardId,
        now_ms: u64,
    ) -> ClickOutcome {
        let Some(card) = store.lookup(id) else {
            return ClickOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        if card.matched {
            return ClickOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if card.face_up {
            return ClickOutcome::Ignored(IgnoreReason::FaceUp);
        }
        if self.selection.is_full() {
            return ClickOutcome::Ignored(IgnoreReason::SelectionFull);
        }

        if tracker.start(now_ms) {
            tracing::debug!(generation = %self.generation, now_ms, "session started");
        }
        store.apply_flip(id);
        self.selection.push(id);

        let Some(pair) = self.selection.pair() else {
            tracing::debug!(card = %id, "first card selected");
            return ClickOutcome::Selected(id);
        };

        tracker.on_move();
        let outcome = match (store.lookup(pair[0]), store.lookup(pair[1])) {
            (Some(a), Some(b)) if a.pairs_with(b) => PairOutcome::Match,
            _ => PairOutcome::Mismatch,
        };
        let delay = match outcome {
            PairOutcome::Match => self.timing.match_delay_ms,
            PairOutcome::Mismatch => self.timing.mismatch_delay_ms,
        };
        let task = ScheduledResolution {
            generation: self.generation,
            cards: pair,
            outcome,
            due_at_ms: now_ms.saturating_add(delay),
        };
        self.queue.push(task);

        tracing::debug!(
            first = %pair[0],
            second = %pair[1],
            ?outcome,
            moves = tracker.moves(),
            due_at_ms = task.due_at_ms,
            "pair selected"
        );
        ClickOutcome::PairFormed(task)
    }

    /// Apply a scheduled resolution.
    ///
    /// Only a task identical to one this resolver queued is applied; anything
    /// else (another generation, a pair that is no longer selected, altered
    /// fields) is stale. A queued task whose delay has not elapsed stays
    /// queued and reports `NotDue`. Neither case changes any state.
    pub fn resolve(
        &mut self,
        store: &mut CardStore,
        tracker: &mut SessionTracker,
        task: &ScheduledResolution,
        now_ms: u64,
    ) -> ResolveOutcome {
        let scheduled = task.generation == self.generation
            && self.selection.pair() == Some(task.cards)
            && self.queue.contains(task);
        if !scheduled {
            tracing::debug!(
                task_generation = %task.generation,
                generation = %self.generation,
                "discarding stale resolution"
            );
            return ResolveOutcome::Stale;
        }
        if !task.is_due(now_ms) {
            tracing::trace!(now_ms, due_at_ms = task.due_at_ms, "resolution not due");
            return ResolveOutcome::NotDue;
        }

        self.queue.remove(task);
        self.selection.clear();

        match task.outcome {
            PairOutcome::Match => {
                store.apply_match(task.cards);
                let won = tracker.on_match(now_ms);
                tracing::debug!(
                    first = %task.cards[0],
                    second = %task.cards[1],
                    matched_pairs = tracker.matched_pairs(),
                    "pair matched"
                );
                ResolveOutcome::Matched { cards: task.cards, won }
            }
            PairOutcome::Mismatch => {
                store.apply_unflip(task.cards);
                tracing::debug!(first = %task.cards[0], second = %task.cards[1], "pair hidden");
                ResolveOutcome::Hidden { cards: task.cards }
            }
        }
    }

    /// Resolve every queued task due at `now_ms`.
    pub fn advance(
        &mut self,
        store: &mut CardStore,
        tracker: &mut SessionTracker,
        now_ms: u64,
    ) -> Vec<ResolveOutcome> {
        self.queue
            .due(now_ms)
            .iter()
            .map(|task| self.resolve(store, tracker, task, now_ms))
            .collect()
    }

    /// Current state machine phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        TurnPhase::from_selection_len(self.selection.len())
    }

    /// The active selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Tasks waiting for their delay.
    #[must_use]
    pub fn pending(&self) -> &ResolutionQueue {
        &self.queue
    }

    /// Session this resolver belongs to.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Reveal delays in use.
    #[must_use]
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }
}
