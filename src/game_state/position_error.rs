use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Reasons a composed position is rejected by `Position::from_parts`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("no {0:?} king on the board")]
    MissingKing(Color),
    #[error("{count} {color:?} kings on the board, expected exactly one")]
    TooManyKings { color: Color, count: usize },
    #[error("en-passant target {0} is not on row 2 or row 5")]
    InvalidEnPassantTarget(Square),
}
