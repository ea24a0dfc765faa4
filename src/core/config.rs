//! Game configuration types.
//!
//! Hosts configure a session at startup by providing:
//! - `DifficultyConfig`: pair count and grid width, fixed for the session
//! - `TimingConfig`: reveal delays and timer cadence
//! - `GameConfig`: combines both with the RNG seed and content identifier
//!
//! Presets cover the enumerated difficulties; `Difficulty::Custom` keeps the
//! set open for extension.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};
use crate::cards::TokenType;

/// Default content identifier carried by completion events.
pub const DEFAULT_CONTENT_ID: &str = "memory-match";

/// Enumerated difficulty levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    /// Host-supplied pair count and grid width.
    Custom,
}

impl Difficulty {
    /// Lowercase name used in completion payloads.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Custom => "custom",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pair count and grid width for one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Which difficulty this config was built from.
    pub difficulty: Difficulty,

    /// Number of distinct token types in the deck.
    pub pair_count: usize,

    /// Columns in the presentation grid.
    pub grid_columns: usize,
}

impl DifficultyConfig {
    /// Preset for an enumerated difficulty.
    ///
    /// `Custom` has no preset and falls back to the easy layout.
    #[must_use]
    pub const fn preset(difficulty: Difficulty) -> Self {
        let pair_count = match difficulty {
            Difficulty::Easy | Difficulty::Custom => 6,
            Difficulty::Medium | Difficulty::Hard => 8,
        };
        Self {
            difficulty,
            pair_count,
            grid_columns: 4,
        }
    }

    /// Custom layout, validated against the token set.
    pub fn custom(pair_count: usize, grid_columns: usize) -> Result<Self> {
        let config = Self {
            difficulty: Difficulty::Custom,
            pair_count,
            grid_columns,
        };
        config.validate()?;
        Ok(config)
    }

    /// Custom layout that clamps instead of failing.
    ///
    /// Pair count is clamped into `1..=TokenType::COUNT` and columns to at
    /// least 1; each adjustment is logged as a warning.
    #[must_use]
    pub fn clamped(pair_count: usize, grid_columns: usize) -> Self {
        let max = TokenType::COUNT;
        let clamped_pairs = pair_count.clamp(1, max);
        if clamped_pairs != pair_count {
            tracing::warn!(
                requested = pair_count,
                available = max,
                using = clamped_pairs,
                "pair count out of range, clamping"
            );
        }
        let clamped_columns = grid_columns.max(1);
        if clamped_columns != grid_columns {
            tracing::warn!(requested = grid_columns, "grid columns must be positive, using 1");
        }
        Self {
            difficulty: Difficulty::Custom,
            pair_count: clamped_pairs,
            grid_columns: clamped_columns,
        }
    }

    /// Check the layout can be built from the token set.
    pub fn validate(&self) -> Result<()> {
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.pair_count > TokenType::COUNT {
            return Err(ConfigError::TooManyPairs {
                requested: self.pair_count,
                available: TokenType::COUNT,
            });
        }
        if self.grid_columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        Ok(())
    }

    /// Number of cards in the deck.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Number of grid rows needed for the deck.
    #[must_use]
    pub const fn grid_rows(&self) -> usize {
        if self.grid_columns == 0 {
            return 0;
        }
        self.card_count().div_ceil(self.grid_columns)
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self::preset(Difficulty::Easy)
    }
}

/// Delays and cadence for the turn resolver and display timer.
///
/// Both delays only need to be long enough for a player to see the pair;
/// exact timing is not part of correctness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay before a matched pair is locked (ms).
    pub match_delay_ms: u64,

    /// Delay before a mismatched pair is hidden again (ms).
    pub mismatch_delay_ms: u64,

    /// Display timer cadence (ms). Read-only, informs the host's tick loop.
    pub tick_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            match_delay_ms: 500,
            mismatch_delay_ms: 1000,
            tick_interval_ms: 100,
        }
    }
}

impl TimingConfig {
    /// Set the match delay.
    #[must_use]
    pub fn with_match_delay(mut self, ms: u64) -> Self {
        self.match_delay_ms = ms;
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Deck size and grid layout.
    pub difficulty: DifficultyConfig,

    /// Reveal delays.
    pub timing: TimingConfig,

    /// RNG seed for deck shuffling.
    pub seed: u64,

    /// Identifier reported in completion events.
    pub content_id: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: DifficultyConfig::default(),
            timing: TimingConfig::default(),
            seed: 0,
            content_id: DEFAULT_CONTENT_ID.to_string(),
        }
    }
}

impl GameConfig {
    /// Create a config for a preset difficulty.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty: DifficultyConfig::preset(difficulty),
            ..Self::default()
        }
    }

    /// Use an explicit difficulty layout.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: DifficultyConfig) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set timing.
    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the content identifier.
    #[must_use]
    pub fn with_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = content_id.into();
        self
    }

    /// Validate the whole config.
    pub fn validate(&self) -> Result<()> {
        self.difficulty.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let easy = DifficultyConfig::preset(Difficulty::Easy);
        assert_eq!(easy.pair_count, 6);
        assert_eq!(easy.grid_columns, 4);
        assert_eq!(easy.card_count(), 12);
        assert_eq!(easy.grid_rows(), 3);

        let medium = DifficultyConfig::preset(Difficulty::Medium);
        assert_eq!(medium.pair_count, 8);
        assert_eq!(medium.grid_rows(), 4);

        let hard = DifficultyConfig::preset(Difficulty::Hard);
        assert_eq!(hard.pair_count, 8);
        assert_eq!(hard.grid_columns, 4);
    }

    #[test]
    fn test_presets_are_valid() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(DifficultyConfig::preset(d).validate().is_ok());
        }
    }

    #[test]
    fn test_custom_validation() {
        assert_eq!(DifficultyConfig::custom(0, 4), Err(ConfigError::NoPairs));
        assert_eq!(
            DifficultyConfig::custom(TokenType::COUNT + 1, 4),
            Err(ConfigError::TooManyPairs {
                requested: TokenType::COUNT + 1,
                available: TokenType::COUNT,
            })
        );
        assert_eq!(DifficultyConfig::custom(3, 0), Err(ConfigError::ZeroColumns));

        let ok = DifficultyConfig::custom(3, 3).unwrap();
        assert_eq!(ok.difficulty, Difficulty::Custom);
        assert_eq!(ok.grid_rows(), 2);
    }

    #[test]
    fn test_clamped() {
        let c = DifficultyConfig::clamped(99, 0);
        assert_eq!(c.pair_count, TokenType::COUNT);
        assert_eq!(c.grid_columns, 1);
        assert!(c.validate().is_ok());

        let c = DifficultyConfig::clamped(0, 4);
        assert_eq!(c.pair_count, 1);

        let c = DifficultyConfig::clamped(5, 4);
        assert_eq!(c.pair_count, 5);
    }

    #[test]
    fn test_timing_defaults() {
        let t = TimingConfig::default();
        assert_eq!(t.match_delay_ms, 500);
        assert_eq!(t.mismatch_delay_ms, 1000);
        assert_eq!(t.tick_interval_ms, 100);

        let t = t.with_match_delay(10).with_mismatch_delay(20);
        assert_eq!(t.match_delay_ms, 10);
        assert_eq!(t.mismatch_delay_ms, 20);
    }

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new(Difficulty::Medium)
            .with_seed(7)
            .with_content_id("lesson-12");

        assert_eq!(config.difficulty.pair_count, 8);
        assert_eq!(config.seed, 7);
        assert_eq!(config.content_id, "lesson-12");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_difficulty_name() {
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
