//! The fixed token set.
//!
//! Each deck uses the first `pair_count` tokens, two cards per token. The
//! display mapping (label, color) is a total table with no runtime lookup.

use serde::{Deserialize, Serialize};

/// A card face. Two cards in a deck share each token used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TokenType {
    Star,
    Heart,
    Diamond,
    Club,
    Spade,
    Moon,
    Sun,
    Bolt,
    Leaf,
    Drop,
}

impl TokenType {
    /// Every token, in deck-building order.
    pub const ALL: [TokenType; 10] = [
        TokenType::Star,
        TokenType::Heart,
        TokenType::Diamond,
        TokenType::Club,
        TokenType::Spade,
        TokenType::Moon,
        TokenType::Sun,
        TokenType::Bolt,
        TokenType::Leaf,
        TokenType::Drop,
    ];

    /// Size of the token set; the maximum pair count.
    pub const COUNT: usize = Self::ALL.len();

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TokenType::Star => "Star",
            TokenType::Heart => "Heart",
            TokenType::Diamond => "Diamond",
            TokenType::Club => "Club",
            TokenType::Spade => "Spade",
            TokenType::Moon => "Moon",
            TokenType::Sun => "Sun",
            TokenType::Bolt => "Bolt",
            TokenType::Leaf => "Leaf",
            TokenType::Drop => "Drop",
        }
    }

    /// Display color as a CSS hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            TokenType::Star => "#f5c518",
            TokenType::Heart => "#e63946",
            TokenType::Diamond => "#4cc9f0",
            TokenType::Club => "#2a9d8f",
            TokenType::Spade => "#264653",
            TokenType::Moon => "#9d4edd",
            TokenType::Sun => "#f4a261",
            TokenType::Bolt => "#ffb703",
            TokenType::Leaf => "#52b788",
            TokenType::Drop => "#1d4ed8",
        }
    }

    /// The first `count` tokens, or `None` if the set is too small.
    #[must_use]
    pub fn first(count: usize) -> Option<&'static [TokenType]> {
        let all: &'static [TokenType] = &Self::ALL;
        all.get(..count)
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_distinct() {
        let set: HashSet<_> = TokenType::ALL.iter().collect();
        assert_eq!(set.len(), TokenType::COUNT);

        let colors: HashSet<_> = TokenType::ALL.iter().map(|t| t.color()).collect();
        assert_eq!(colors.len(), TokenType::COUNT);
    }

    #[test]
    fn test_first() {
        assert_eq!(TokenType::first(2), Some(&[TokenType::Star, TokenType::Heart][..]));
        assert_eq!(TokenType::first(0).map(<[_]>::len), Some(0));
        assert!(TokenType::first(TokenType::COUNT).is_some());
        assert!(TokenType::first(TokenType::COUNT + 1).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenType::Moon.to_string(), "Moon");
    }
}
