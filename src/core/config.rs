//! Game configuration.
//!
//! `RealmsConfig` collects the numbers the rules engine needs at setup:
//! starting deck composition, trade row width, hand draw limit, starting
//! authority, and the RNG seed. Defaults match the core-set rules.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::error::{RealmsError, Result};

/// Number of cards in every starting deck.
pub const STARTING_DECK_SIZE: usize = 10;

/// Most cards a hand may draw in one turn.
pub const MAX_HAND_DRAW: usize = 5;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use realms::core::RealmsConfig;
///
/// let config = RealmsConfig::new()
///     .with_seed(7)
///     .with_starting_authority(30);
///
/// assert_eq!(config.trade_row_size, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealmsConfig {
    /// Seed for every shuffle in the game. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Scouts in each starting deck.
    pub starting_scouts: usize,

    /// Vipers in each starting deck.
    pub starting_vipers: usize,

    /// Visible cards in the trade row (Explorer slot not included).
    pub trade_row_size: usize,

    /// Upper bound on the cards a hand may draw, at most `MAX_HAND_DRAW`.
    pub max_hand_draw: usize,

    /// Authority each player starts with.
    pub starting_authority: i32,
}

impl Default for RealmsConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_scouts: 8,
            starting_vipers: 2,
            trade_row_size: 5,
            max_hand_draw: MAX_HAND_DRAW,
            starting_authority: 50,
        }
    }
}

impl RealmsConfig {
    /// Create the core-set configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the trade row width.
    #[must_use]
    pub fn with_trade_row_size(mut self, size: usize) -> Self {
        self.trade_row_size = size;
        self
    }

    /// Set the starting authority.
    #[must_use]
    pub fn with_starting_authority(mut self, authority: i32) -> Self {
        self.starting_authority = authority;
        self
    }

    /// Total cards in a starting deck.
    #[must_use]
    pub fn starting_deck_size(&self) -> usize {
        self.starting_scouts + self.starting_vipers
    }

    /// Build the root RNG for a game.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }

    /// Check the configuration against the fixed game rules.
    pub fn validate(&self) -> Result<()> {
        if self.starting_deck_size() != STARTING_DECK_SIZE {
            return Err(RealmsError::InvalidConfig(format!(
                "starting deck must hold {} cards, configured {} scouts and {} vipers",
                STARTING_DECK_SIZE, self.starting_scouts, self.starting_vipers
            )));
        }
        if self.trade_row_size == 0 {
            return Err(RealmsError::InvalidConfig(
                "trade row must show at least one card".to_string(),
            ));
        }
        if self.max_hand_draw == 0 || self.max_hand_draw > MAX_HAND_DRAW {
            return Err(RealmsError::InvalidConfig(format!(
                "hand draw limit must be between 1 and {}, configured {}",
                MAX_HAND_DRAW, self.max_hand_draw
            )));
        }
        if self.starting_authority <= 0 {
            return Err(RealmsError::InvalidConfig(
                "starting authority must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
