//! # memory-match
//!
//! Engine for a single-screen memory-matching game: a shuffled deck of
//! paired tokens, revealed two at a time, until every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Owned session context**: One `MemoryGame` value owns the deck,
//!    selection, session stats and pending work. No globals.
//!
//! 2. **Deferred work is data**: Reveal delays produce `ScheduledResolution`
//!    values tagged with a session `Generation`. Stale tasks are no-ops.
//!
//! 3. **Deterministic**: Seeded ChaCha8 shuffling and caller-supplied
//!    timestamps make every transition reproducible.
//!
//! ## Modules
//!
//! - `core`: Ids, RNG, configuration, errors
//! - `cards`: Token set, cards, deck builder, card state store
//! - `turn`: Selection state machine and scheduled resolutions
//! - `session`: Moves, time, win detection, scoring
//! - `notify`: Fire-once completion events
//! - `game`: `MemoryGame` and the presentation snapshot

pub mod core;
pub mod cards;
pub mod turn;
pub mod session;
pub mod notify;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, Generation, GameRng,
    Difficulty, DifficultyConfig, GameConfig, TimingConfig,
    ConfigError,
};

pub use crate::cards::{Card, CardStore, DeckBuilder, TokenType};

pub use crate::turn::{
    ClickOutcome, IgnoreReason, PairOutcome, ResolveOutcome,
    ScheduledResolution, Selection, TurnPhase, TurnResolver,
};

pub use crate::session::{score, SessionTracker};

pub use crate::notify::{
    CollectingSink, CompletionData, CompletionEvent, CompletionNotifier,
    CompletionSink, Scope, TracingSink,
};

pub use crate::game::{BoardSnapshot, CardView, MemoryGame};
