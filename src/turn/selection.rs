//! The active turn's selection: at most two card ids, in click order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

/// Maximum cards selected per turn.
pub const MAX_SELECTION: usize = 2;

/// Cards chosen in the current turn.
///
/// SmallVec keeps both slots inline; a selection never allocates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: SmallVec<[CardId; MAX_SELECTION]>,
}

impl Selection {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card. Refused when full or already selected.
    pub fn push(&mut self, id: CardId) -> bool {
        if self.is_full() || self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Both selected ids, once the selection is full.
    #[must_use]
    pub fn pair(&self) -> Option<[CardId; 2]> {
        match self.ids.as_slice() {
            &[a, b] => Some([a, b]),
            _ => None,
        }
    }

    /// Is `id` selected?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected cards (0, 1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Is nothing selected?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Are both slots taken?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTION
    }

    /// Selected ids in click order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardId] {
        &self.ids
    }

    /// Empty the selection at the end of a turn.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
