//! Live game wrapper.
//!
//! Holds the current position and the move history. Each move installs a
//! freshly derived position; superseded positions are dropped, never rolled
//! back in place.

use thiserror::Error;
use tracing::debug;

use crate::game::game_status::{game_status, GameStatus};
use crate::game_state::chess_types::*;

/// One played move: where it started, where it ended, and the piece that moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },
}

#[derive(Debug, Clone, Default)]
pub struct Game {
    position: Position,
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn current(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Plays a move the caller has already validated.
    ///
    /// Behavior on an illegal move is unspecified; use [`Game::try_make_move`]
    /// for unvalidated input.
    pub fn make_move(&mut self, start: Square, end: Square, promotion: Option<PieceKind>) {
        let Some(piece) = self.position.get_piece_at(start) else {
            debug_assert!(false, "make_move: no piece on start square {start}");
            return;
        };
        let next = self.position.after_move(start, end, promotion);
        debug!(%start, %end, ?piece, ply = self.history.len() + 1, "move played");
        self.position = next;
        self.history.push(MoveRecord {
            from: start,
            to: end,
            piece,
        });
    }

    /// Validates, then plays the move.
    pub fn try_make_move(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
    ) -> Result<&Position, GameError> {
        let mv = Move::with_promotion(start, end, promotion.unwrap_or(PieceKind::Queen));
        if !self.position.is_legal(mv) {
            debug!(%start, %end, "rejected illegal move");
            return Err(GameError::IllegalMove {
                from: start,
                to: end,
            });
        }
        self.make_move(start, end, promotion);
        Ok(&self.position)
    }

    pub fn status(&self) -> GameStatus {
        game_status(&self.position)
    }
}
