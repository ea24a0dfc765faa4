//! Deck building.
//!
//! A deck for `N` pairs holds `2N` cards: two per token, ids `0..2N` in
//! emission order, then uniformly shuffled. Shuffling permutes positions
//! only, so ids stay unique but no longer follow board order.

use rustc_hash::FxHashMap;

use super::card::Card;
use super::token::TokenType;
use crate::core::{CardId, ConfigError, GameRng, Result};

/// Builds decks from the fixed token set.
pub struct DeckBuilder;

impl DeckBuilder {
    /// Build a shuffled deck of `pair_count` pairs.
    pub fn build(pair_count: usize, rng: &mut GameRng) -> Result<Vec<Card>> {
        if pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        let tokens = TokenType::first(pair_count).ok_or(ConfigError::TooManyPairs {
            requested: pair_count,
            available: TokenType::COUNT,
        })?;

        let mut deck: Vec<Card> = tokens
            .iter()
            .flat_map(|&token| [token, token])
            .enumerate()
            .map(|(i, token)| Card::new(CardId(i as u32), token))
            .collect();

        rng.shuffle(&mut deck);
        tracing::trace!(pair_count, seed = rng.seed(), "built deck");
        Ok(deck)
    }

    /// Build an unshuffled deck from an explicit board layout.
    ///
    /// Position `i` gets id `i`. Every token present must appear exactly twice.
    pub fn from_tokens(layout: &[TokenType]) -> Result<Vec<Card>> {
        if layout.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }

        let mut counts: FxHashMap<TokenType, usize> = FxHashMap::default();
        for &token in layout {
            *counts.entry(token).or_insert(0) += 1;
        }
        let mut bad: Vec<_> = counts.into_iter().filter(|&(_, n)| n != 2).collect();
        bad.sort_unstable();
        if let Some(&(token, count)) = bad.first() {
            return Err(ConfigError::TokenCount { token, count });
        }

        Ok(layout
            .iter()
            .enumerate()
            .map(|(i, &token)| Card::new(CardId(i as u32), token))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_build_sizes_and_pairs() {
        let mut rng = GameRng::new(42);
        let deck = DeckBuilder::build(6, &mut rng).unwrap();

        assert_eq!(deck.len(), 12);

        let ids: HashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 12);
        assert!(ids.iter().all(|id| id.raw() < 12));

        for token in &TokenType::ALL[..6] {
            assert_eq!(deck.iter().filter(|c| c.token == *token).count(), 2);
        }
        assert!(deck.iter().all(|c| !c.face_up && !c.matched));
    }

    #[test]
    fn test_build_is_seeded() {
        let a = DeckBuilder::build(8, &mut GameRng::new(9)).unwrap();
        let b = DeckBuilder::build(8, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);

        let c = DeckBuilder::build(8, &mut GameRng::new(10)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_build_rejects_bad_pair_counts() {
        let mut rng = GameRng::new(0);
        assert_eq!(DeckBuilder::build(0, &mut rng), Err(ConfigError::NoPairs));
        assert_eq!(
            DeckBuilder::build(TokenType::COUNT + 1, &mut rng),
            Err(ConfigError::TooManyPairs {
                requested: TokenType::COUNT + 1,
                available: TokenType::COUNT,
            })
        );
        assert!(DeckBuilder::build(TokenType::COUNT, &mut rng).is_ok());
    }

    #[test]
    fn test_from_tokens() {
        use TokenType::{Heart as B, Star as A};

        let deck = DeckBuilder::from_tokens(&[A, B, A, B]).unwrap();
        assert_eq!(deck.len(), 4);
        assert_eq!(deck[2].id, CardId(2));
        assert_eq!(deck[2].token, A);
    }

    #[test]
    fn test_from_tokens_validates_counts() {
        use TokenType::{Heart as B, Star as A};

        assert_eq!(DeckBuilder::from_tokens(&[]), Err(ConfigError::EmptyLayout));
        assert_eq!(
            DeckBuilder::from_tokens(&[A, A, A, B]),
            Err(ConfigError::TokenCount { token: A, count: 3 })
        );
    }
}
