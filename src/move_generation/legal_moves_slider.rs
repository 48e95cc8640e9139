//! Bishop, rook, and queen ray walks.
//!
//! Emits every empty square along each direction, then the first blocker if
//! it is an enemy piece.

use crate::game_state::chess_types::*;
use crate::move_generation::move_directions::{Direction, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};

/// Ray set for a sliding piece; empty for non-sliders.
#[inline]
pub fn slider_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Queen => &ALL_DIRECTIONS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

pub fn generate_slider_moves(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match position.get_piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(blocker) => {
                    if blocker.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}
