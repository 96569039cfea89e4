//! Json game configuration
//!
//! ```
//! # use snake_game_types::config::GameConfig;
//! let config = GameConfig::from_json(r#"{"board": "B2x2|W1E1|E1S1", "seed": 4}"#).unwrap();
//! let game = config.initialize_game().unwrap();
//! assert_eq!(game.snake_head.as_usize(), 3);
//! ```
use rand::{rngs::SmallRng, SeedableRng};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::game::GameState;

/// How to start a game. Every field is optional, `{}` plays the default board
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// a compressed board, the default board is used when absent
    #[serde(default)]
    pub board: Option<String>,
    /// seed for food placement, seeded from the os when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// parses a config from json
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// the rng food placement should draw from
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }

    /// builds the game this config describes
    pub fn initialize_game(&self) -> Result<GameState, ConfigError> {
        let mut rng = self.rng();
        Ok(GameState::new(self.board.as_deref(), &mut rng)?)
    }
}
