//! Presentation read model.
//!
//! The presentation layer re-renders from a `BoardSnapshot` after every
//! transition. Face-down cards carry no token, so a renderer cannot leak
//! hidden faces.

use serde::Serialize;

use crate::cards::{Card, TokenType};
use crate::core::{CardId, Difficulty, Generation};
use crate::notify::CompletionSink;
use crate::turn::TurnPhase;

use super::engine::MemoryGame;

/// What a renderer may show for one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub face_up: bool,
    pub matched: bool,
    /// Token, only when face-up.
    pub token: Option<TokenType>,
    /// Display color, only when face-up.
    pub color: Option<&'static str>,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        let shown = card.face_up.then_some(card.token);
        Self {
            id: card.id,
            face_up: card.face_up,
            matched: card.matched,
            token: shown,
            color: shown.map(TokenType::color),
        }
    }
}

/// Full board plus HUD values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub generation: Generation,
    pub difficulty: Difficulty,
    /// Cards in board order, chunked by grid columns.
    pub rows: Vec<Vec<CardView>>,
    pub phase: TurnPhase,
    pub moves: u32,
    pub matched_pairs: usize,
    pub pair_count: usize,
    pub elapsed_ms: u64,
    pub score: u32,
    pub won: bool,
}

impl BoardSnapshot {
    pub(crate) fn capture<S: CompletionSink>(game: &MemoryGame<S>) -> Self {
        let columns = game.config().difficulty.grid_columns.max(1);
        let cards: Vec<CardView> = game.cards().iter().map(CardView::from).collect();
        let session = game.session();

        Self {
            generation: game.generation(),
            difficulty: game.config().difficulty.difficulty,
            rows: cards.chunks(columns).map(<[CardView]>::to_vec).collect(),
            phase: game.phase(),
            moves: session.moves(),
            matched_pairs: session.matched_pairs(),
            pair_count: session.pair_count(),
            elapsed_ms: session.elapsed_ms(),
            score: session.current_score(),
            won: session.is_won(),
        }
    }

    /// Iterate every card view in board order.
    pub fn cards(&self) -> impl Iterator<Item = &CardView> {
        self.rows.iter().flatten()
    }
}
