//! Configuration errors.
//!
//! Only initialization can fail. Runtime anomalies (stray clicks, stale
//! callbacks) are reported as outcome enums, not errors.

use thiserror::Error;

use crate::cards::TokenType;

/// Errors raised while validating a game configuration or deck layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pair count must be at least 1")]
    NoPairs,

    #[error("requested {requested} pairs but only {available} token types exist")]
    TooManyPairs { requested: usize, available: usize },

    #[error("grid must have at least one column")]
    ZeroColumns,

    #[error("token {token} appears {count} times in layout, expected exactly 2")]
    TokenCount { token: TokenType, count: usize },

    #[error("deck layout is empty")]
    EmptyLayout,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
