//! Search-collaborator abstraction.
//!
//! Engines only consume the rules API: they enumerate legal moves, derive
//! positions, and report a choice. Positions are plain values, so an engine can
//! run on a worker thread while the caller keeps its own copy.

use thiserror::Error;

use crate::game::game_status::GameStatus;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub best_move: Move,
    pub info_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no move to choose, game is over ({0:?})")]
    GameOver(GameStatus),
}

pub trait Engine: Send {
    /// Label used in log lines and `info string` output.
    fn name(&self) -> &str;

    /// Reset any per-game state before the first move of a new game.
    fn new_game(&mut self) {}

    fn choose_move(&mut self, position: &Position) -> Result<EngineOutput, EngineError>;
}
