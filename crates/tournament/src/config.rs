//! Gauntlet configuration
//!
//! A round-robin is described declaratively in a TOML file; fields left out
//! fall back to the defaults, so a config can be as short as an engine list.

use connect_core::Game;
use serde::{Deserialize, Serialize};

/// Configuration for an all-play-all gauntlet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GauntletConfig {
    /// Engine specifications, as accepted by the CLI
    pub engines: Vec<String>,
    pub games_per_match: u32,
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub max_moves: u32,
}

impl Default for GauntletConfig {
    fn default() -> Self {
        Self {
            engines: vec!["random".into(), "alphabeta".into(), "astar".into()],
            games_per_match: 10,
            // A board the exhaustive engine can search to the end per move.
            rows: 3,
            cols: 4,
            win_length: 3,
            max_moves: 500,
        }
    }
}

impl GauntletConfig {
    /// Load a config from a TOML file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// The board every gauntlet game is played on
    pub fn game(&self) -> Game {
        Game::new(self.rows, self.cols, self.win_length)
    }
}
