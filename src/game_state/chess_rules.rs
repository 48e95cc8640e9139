//! Canonical chess-rule constants.
//!
//! Starting arrangement, castling geometry, and promotion choices live here so
//! move generation and move application agree on a single source.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Back-rank piece order from column 0 to column 7.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_START_COL: u8 = 4;

pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

pub const KINGSIDE_KING_TARGET_COL: u8 = 6;
pub const QUEENSIDE_KING_TARGET_COL: u8 = 2;

/// Promotion kinds in generation order.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[inline]
pub const fn king_start_square(color: Color) -> Square {
    Square::new(color.home_row(), KING_START_COL)
}

#[inline]
pub const fn kingside_rook_square(color: Color) -> Square {
    Square::new(color.home_row(), KINGSIDE_ROOK_COL)
}

#[inline]
pub const fn queenside_rook_square(color: Color) -> Square {
    Square::new(color.home_row(), QUEENSIDE_ROOK_COL)
}

/// For a castling king move `(king_from, king_to)`, the rook's `(from, to)`.
///
/// The rook lands on the square adjacent to the king's destination, on the
/// side the king came from.
pub fn castling_rook_squares(king_from: Square, king_to: Square) -> Option<(Square, Square)> {
    if king_from.row != king_to.row || king_from.col.abs_diff(king_to.col) != 2 {
        return None;
    }
    let row = king_from.row;
    if king_to.col > king_from.col {
        Some((
            Square::new(row, KINGSIDE_ROOK_COL),
            Square::new(row, king_to.col - 1),
        ))
    } else {
        Some((
            Square::new(row, QUEENSIDE_ROOK_COL),
            Square::new(row, king_to.col + 1),
        ))
    }
}
