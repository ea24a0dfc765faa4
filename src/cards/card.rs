//! Card entities - runtime card state.
//!
//! A `Card` pairs an identity and token with two flags. Flags are only ever
//! changed through the `CardStore`, which keeps `matched ⇒ face_up`.

use serde::{Deserialize, Serialize};

use super::token::TokenType;
use crate::core::CardId;

/// One card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Session-unique id.
    pub id: CardId,

    /// Face token; shared with exactly one other card.
    pub token: TokenType,

    /// Is the face currently shown?
    pub face_up: bool,

    /// Has this card been paired? Implies `face_up`.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, token: TokenType) -> Self {
        Self {
            id,
            token,
            face_up: false,
            matched: false,
        }
    }

    /// Can a click select this card?
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.token == other.token
    }

    pub(crate) fn flipped(mut self) -> Self {
        self.face_up = true;
        self
    }

    pub(crate) fn locked(mut self) -> Self {
        self.face_up = true;
        self.matched = true;
        self
    }

    pub(crate) fn hidden(mut self) -> Self {
        self.face_up = false;
        self
    }
}
