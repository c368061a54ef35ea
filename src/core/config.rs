//! Game configuration.
//!
//! ```
//! use rust_president::core::{GameConfig, PlayerId};
//!
//! let config = GameConfig::new(5)
//!     .with_seed(99)
//!     .with_first_player(PlayerId::new(2));
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::error::{PresidentError, Result};

/// Fewest seats a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a game can start with.
pub const MAX_PLAYERS: usize = 8;

/// Settings for one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats dealt in.
    pub player_count: usize,

    /// Seed for the deck shuffle and any random policy.
    pub seed: u64,

    /// Seat that leads the first trick.
    #[serde(default)]
    pub first_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            seed: 0,
            first_player: PlayerId::new(0),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Check the player count and first seat.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(PresidentError::InvalidConfig(format!(
                "player count must be {}-{}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.player_count
            )));
        }
        if self.first_player.index() >= self.player_count {
            return Err(PresidentError::InvalidConfig(format!(
                "first player {} is not seated in a {}-player game",
                self.first_player, self.player_count
            )));
        }
        Ok(())
    }
}
