//! Tournament Runner for connect-arena
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across engines
//! - Playing every pairing of a gauntlet described in a TOML config
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the adversarial and best-first engines
//! cargo run -p tournament -- match alphabeta astar --games 100
//!
//! # Run every pairing from a config
//! cargo run -p tournament -- gauntlet gauntlet.toml
//! ```

mod config;
mod display;
mod elo;
mod match_runner;
mod results;

pub use config::*;
pub use display::*;
pub use elo::*;
pub use match_runner::*;
pub use results::*;
