//! Pseudo-legal generation for the side to move.
//!
//! Scans the board row-major and dispatches on the piece kind. Moves may still
//! leave the mover's own king attacked; see `legal_move_generator` for the filter.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_slider::{generate_slider_moves, slider_directions};

pub fn generate_pseudo_legal_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move();
    for (square, piece) in position.board().occupied() {
        if piece.color == side {
            generate_piece_moves(position, square, piece, out);
        }
    }
}

/// Pseudo-legal moves of the piece standing on `from`.
pub fn generate_piece_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(position, from, piece.color, out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => generate_slider_moves(
            position,
            from,
            piece.color,
            slider_directions(piece.kind),
            out,
        ),
        PieceKind::King => generate_king_moves(position, from, piece.color, out),
    }
}
