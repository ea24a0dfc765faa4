//! Card state store.
//!
//! The `CardStore` is the single source of truth for card flags. Every
//! mutation builds the next persistent vector and swaps it in whole, so a
//! `snapshot()` taken by an observer never shows a half-applied update.
//!
//! ```
//! use memory_match::cards::{CardStore, DeckBuilder, TokenType};
//! use memory_match::core::CardId;
//!
//! let deck = DeckBuilder::from_tokens(&[TokenType::Star, TokenType::Star]).unwrap();
//! let mut store = CardStore::new(deck);
//!
//! let before = store.snapshot();
//! assert!(store.apply_flip(CardId(0)));
//!
//! assert!(!before[0].face_up);
//! assert!(store.lookup(CardId(0)).unwrap().face_up);
//! ```

use im::Vector;
use rustc_hash::FxHashMap;

use super::card::Card;
use crate::core::CardId;

/// Authoritative card collection.
#[derive(Clone, Debug, Default)]
pub struct CardStore {
    /// Cards in board order.
    cards: Vector<Card>,

    /// id -> board position
    index: FxHashMap<CardId, usize>,

    /// Incremented once per applied mutation.
    version: u64,
}

impl CardStore {
    /// Create a store over a deck in board order.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        let index = deck.iter().enumerate().map(|(pos, c)| (c.id, pos)).collect();
        Self {
            cards: deck.into_iter().collect(),
            index,
            version: 0,
        }
    }

    /// Look up a card by id.
    #[must_use]
    pub fn lookup(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).and_then(|&pos| self.cards.get(pos))
    }

    /// Board position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Show one card's face. Returns false for unknown ids.
    pub fn apply_flip(&mut self, id: CardId) -> bool {
        self.replace(&[id], Card::flipped)
    }

    /// Lock exactly two distinct cards as matched (and face-up).
    pub fn apply_match(&mut self, ids: [CardId; 2]) -> bool {
        ids[0] != ids[1] && self.replace(&ids, Card::locked)
    }

    /// Hide exactly two distinct cards.
    ///
    /// Refused if either card is matched: matched cards never flip back.
    pub fn apply_unflip(&mut self, ids: [CardId; 2]) -> bool {
        if ids[0] == ids[1] || ids.iter().any(|&id| self.lookup(id).is_some_and(|c| c.matched)) {
            return false;
        }
        self.replace(&ids, Card::hidden)
    }

    /// Apply `f` to every card in `ids` and swap in the result.
    ///
    /// All ids must be known; otherwise nothing changes.
    fn replace(&mut self, ids: &[CardId], f: impl Fn(Card) -> Card) -> bool {
        let Some(positions) = ids.iter().map(|id| self.position(*id)).collect::<Option<Vec<_>>>() else {
            return false;
        };

        let mut next = self.cards.clone();
        for pos in positions {
            let card = next[pos];
            next.set(pos, f(card));
        }
        self.cards = next;
        self.version += 1;
        true
    }

    /// O(1) copy of the current state for observers.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card> {
        self.cards.clone()
    }

    /// Iterate cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the store empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of matched cards (twice the matched pairs).
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Mutation counter.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}
