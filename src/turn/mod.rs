//! Turn resolution.
//!
//! A turn selects two face-down cards, judges them, and after a reveal delay
//! either locks them as matched or hides them again. Deferred work is data
//! (`ScheduledResolution`), tagged with the session generation so that a
//! task outliving its session resolves to `ResolveOutcome::Stale`.
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::cards::{CardStore, DeckBuilder, TokenType};
//! use memory_match::core::{CardId, Generation, TimingConfig};
//! use memory_match::session::SessionTracker;
//! use memory_match::turn::{ClickOutcome, ResolveOutcome, TurnResolver};
//!
//! let deck = DeckBuilder::from_tokens(&[TokenType::Star, TokenType::Star]).unwrap();
//! let mut store = CardStore::new(deck);
//! let mut tracker = SessionTracker::new(1);
//! let mut resolver = TurnResolver::new(Generation::initial(), TimingConfig::default());
//!
//! resolver.select(&mut store, &mut tracker, CardId(0), 0);
//! let ClickOutcome::PairFormed(task) = resolver.select(&mut store, &mut tracker, CardId(1), 0) else {
//!     unreachable!()
//! };
//! let outcome = resolver.resolve(&mut store, &mut tracker, &task, task.due_at_ms);
//! assert!(matches!(outcome, ResolveOutcome::Matched { won: true, .. }));
//! ```

mod selection;
mod schedule;
mod resolver;

pub use selection::{Selection, MAX_SELECTION};
pub use schedule::{PairOutcome, ResolutionQueue, ScheduledResolution};
pub use resolver::TurnResolver;

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// State machine phase, derived from the selection length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing selected.
    Idle,
    /// One card revealed, waiting for the second.
    OneSelected,
    /// Two cards revealed, waiting for the delayed outcome.
    Resolving,
}

impl TurnPhase {
    /// Phase for a selection of `len` cards.
    #[must_use]
    pub const fn from_selection_len(len: usize) -> Self {
        match len {
            0 => TurnPhase::Idle,
            1 => TurnPhase::OneSelected,
            _ => TurnPhase::Resolving,
        }
    }
}

/// Why a click was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card with that id in this session.
    UnknownCard,
    /// Card is already part of a matched pair.
    AlreadyMatched,
    /// Card is already showing.
    FaceUp,
    /// Two cards are already selected.
    SelectionFull,
}

/// Result of a click intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// No state changed.
    Ignored(IgnoreReason),
    /// First card of the turn revealed.
    Selected(CardId),
    /// Second card revealed; the resolution is scheduled.
    PairFormed(ScheduledResolution),
}

impl ClickOutcome {
    /// Did the click change state?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored(_))
    }
}

/// Result of applying a scheduled resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveOutcome {
    /// Pair locked. `won` is true on the resolution that completed the board.
    Matched { cards: [CardId; 2], won: bool },
    /// Pair hidden again.
    Hidden { cards: [CardId; 2] },
    /// Task was not scheduled by this session and turn; nothing changed.
    Stale,
    /// Task is queued but its delay has not elapsed; nothing changed.
    NotDue,
}
