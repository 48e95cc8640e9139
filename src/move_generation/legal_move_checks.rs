//! Attack and check detection by ray casting from the target square.
//!
//! Each of the eight rays is walked until the first occupied square; anything
//! further along is shielded by that blocker. Knights are tested separately.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::move_directions::{DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL};

/// First piece met walking from `origin` along `(d_row, d_col)`, with its
/// distance in steps.
#[inline]
pub fn first_piece_on_ray(
    board: &Board,
    origin: Square,
    d_row: i8,
    d_col: i8,
) -> Option<(u8, Piece)> {
    let mut distance = 1u8;
    let mut cursor = origin.offset(d_row, d_col);
    while let Some(square) = cursor {
        if let Some(piece) = board.get(square) {
            return Some((distance, piece));
        }
        distance += 1;
        cursor = square.offset(d_row, d_col);
    }
    None
}

pub fn is_square_attacked(position: &Position, square: Square, by_color: Color) -> bool {
    let board = position.board();

    for (d_row, d_col) in ORTHOGONAL {
        if let Some((distance, piece)) = first_piece_on_ray(board, square, d_row, d_col) {
            if piece.color != by_color {
                continue;
            }
            match piece.kind {
                PieceKind::Rook | PieceKind::Queen => return true,
                PieceKind::King if distance == 1 => return true,
                _ => {}
            }
        }
    }

    // A pawn attacks the origin from one step behind it in the attacker's
    // direction of travel.
    let pawn_row_delta = -by_color.forward();
    for (d_row, d_col) in DIAGONAL {
        if let Some((distance, piece)) = first_piece_on_ray(board, square, d_row, d_col) {
            if piece.color != by_color {
                continue;
            }
            match piece.kind {
                PieceKind::Bishop | PieceKind::Queen => return true,
                PieceKind::King if distance == 1 => return true,
                PieceKind::Pawn if distance == 1 && d_row == pawn_row_delta => return true,
                _ => {}
            }
        }
    }

    let enemy_knight = Piece::new(by_color, PieceKind::Knight);
    KNIGHT_OFFSETS.iter().any(|&(d_row, d_col)| {
        square
            .offset(d_row, d_col)
            .is_some_and(|sq| board.get(sq) == Some(enemy_knight))
    })
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    is_square_attacked(position, position.king_square(color), color.opposite())
}
