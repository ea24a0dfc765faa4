//! Cards: token set, card entities, deck building and the card state store.
//!
//! - `TokenType`: the fixed token set and its display table
//! - `Card`: id, token and face-up/matched flags
//! - `DeckBuilder`: paired, shuffled decks
//! - `CardStore`: atomic flag updates over a persistent vector

mod token;
mod card;
mod deck;
mod store;

pub use token::TokenType;
pub use card::Card;
pub use deck::DeckBuilder;
pub use store::CardStore;
