//! Identity types: card ids and session generations.
//!
//! ## Card IDs
//!
//! Card ids are allocated sequentially from 0 by the deck builder. They are
//! stable for the lifetime of a session, but **reused** across sessions: card
//! 3 in one game and card 3 in the next are unrelated.
//!
//! ## Generations
//!
//! Because ids are reused, deferred work cannot be validated by id alone.
//! Every session carries a `Generation` that is bumped on re-initialization;
//! scheduled resolutions are tagged with it and discarded on mismatch.
//!
//! ```
//! use memory_match::core::{CardId, Generation};
//!
//! let first = Generation::initial();
//! let second = first.next();
//! assert_ne!(first, second);
//!
//! assert_eq!(CardId::new(3).raw(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a card within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into a freshly built deck (ids are dense from 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Session identity counter.
///
/// Starts at 0 for the first session and increases by one per re-init.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// Generation of the first session.
    #[must_use]
    pub const fn initial() -> Self {
        Self(0)
    }

    /// The generation that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Get the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(CardId::from(7), id);
    }

    #[test]
    fn test_card_id_ordering() {
        assert!(CardId(1) < CardId(2));
    }

    #[test]
    fn test_generation_next() {
        let g = Generation::initial();
        assert_eq!(g.raw(), 0);
        assert_eq!(g.next().raw(), 1);
        assert_eq!(g.next().next(), Generation(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
        assert_eq!(format!("{}", Generation(3)), "Gen(3)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
