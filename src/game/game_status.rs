//! Terminal-state classification built on the public position API.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Game over iff the side to move has no legal move; checkmate when its king
/// is attacked, stalemate otherwise.
pub fn game_status(position: &Position) -> GameStatus {
    if !position.get_legal_moves().is_empty() {
        return GameStatus::Ongoing;
    }
    if position.is_in_check() {
        GameStatus::Checkmate {
            winner: position.side_to_move().opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}
