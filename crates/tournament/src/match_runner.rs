//! Match runner for playing games between engines

use connect_core::{Engine, Game, Outcome, Side};

use crate::display;
use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Board geometry shared by every game in the match
    pub game: Game,
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before declaring a stall
    pub max_moves: u32,
    /// Whether to swap seats each game
    pub alternate_first: bool,
    /// Print progress during match
    pub verbose: bool,
    /// Print the board after every move
    pub show_boards: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            game: Game::connect_four(),
            num_games: 10,
            max_moves: 500,
            alternate_first: true,
            verbose: true,
            show_boards: false,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Swap seats if configured
            let engine1_first = !self.config.alternate_first || game_num % 2 == 0;

            let (game_result, plies) = if engine1_first {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 played second
                let (seat_result, plies) = self.play_game(engine2, engine1);
                let flipped = match seat_result {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                };
                (flipped, plies)
            };

            result.record(game_result, plies);

            if self.config.verbose {
                let seat = if engine1_first { "F" } else { "S" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}, {} plies) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    seat,
                    plies,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returning the result from the first seat's
    /// perspective along with the number of plies played.
    ///
    /// Engines are trusted to honor the move contract; an illegal or missing
    /// move is a programming error and panics with the offender's name.
    pub fn play_game(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> (GameResult, u32) {
        let mut state = self.config.game.initial();
        first.new_game();
        second.new_game();

        let mut plies = 0u32;
        while !state.is_terminal() {
            if plies >= self.config.max_moves {
                eprintln!(
                    "Warning: game stopped after {} plies without a result",
                    plies
                );
                return (GameResult::Draw, plies);
            }

            let (chosen, mover) = match state.to_move {
                Side::First => (first.choose_move(&state), first.name()),
                Side::Second => (second.choose_move(&state), second.name()),
            };

            let col = match chosen.best_move {
                Some(col) => col,
                None => panic!("engine {} returned no move in a live position", mover),
            };
            state = state
                .apply(col)
                .unwrap_or_else(|e| panic!("engine {} broke the move contract: {}", mover, e));
            plies += 1;

            if self.config.show_boards {
                display::print_board(&state);
            }
        }

        let game_result = match state.outcome {
            Outcome::FirstWins => GameResult::Win,
            Outcome::SecondWins => GameResult::Loss,
            Outcome::Undecided => GameResult::Draw,
        };
        (game_result, plies)
    }
}
