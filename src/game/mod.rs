//! The memory game: session context, commands and the presentation read model.
//!
//! ```
//! use memory_match::{CollectingSink, GameConfig, MemoryGame, TokenType};
//! use memory_match::core::CardId;
//!
//! let layout = [TokenType::Star, TokenType::Heart, TokenType::Star, TokenType::Heart];
//! let mut game = MemoryGame::with_layout(GameConfig::default(), &layout, CollectingSink::new()).unwrap();
//!
//! game.click(CardId(0), 0);
//! game.click(CardId(2), 0);
//! game.advance(500);
//! game.click(CardId(1), 600);
//! game.click(CardId(3), 600);
//! game.advance(1_100);
//!
//! assert!(game.session().is_won());
//! assert_eq!(game.sink().events().count(), 1);
//! ```

mod engine;
mod view;

pub use engine::MemoryGame;
pub use view::{BoardSnapshot, CardView};
