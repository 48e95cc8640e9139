//! King steps and castling.
//!
//! Castling checks its own attacked squares (start, transit, destination)
//! because the generic post-move filter never looks at the transit square.

use crate::game_state::chess_rules::{
    king_start_square, kingside_rook_square, queenside_rook_square, KINGSIDE_KING_TARGET_COL,
    QUEENSIDE_KING_TARGET_COL,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::move_directions::ALL_DIRECTIONS;

pub fn generate_king_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    for (d_row, d_col) in ALL_DIRECTIONS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match position.get_piece_at(to) {
            Some(target) if target.color == color => {}
            _ => out.push(Move::new(from, to)),
        }
    }

    generate_castling_moves(position, from, color, out);
}

fn generate_castling_moves(
    position: &Position,
    king_from: Square,
    color: Color,
    out: &mut Vec<Move>,
) {
    if king_from != king_start_square(color) {
        return;
    }
    let rights = position.castling_rights();
    if !rights.kingside(color) && !rights.queenside(color) {
        return;
    }

    let enemy = color.opposite();
    // Cannot castle out of check.
    if is_square_attacked(position, king_from, enemy) {
        return;
    }

    let row = king_from.row;
    let own_rook = Some(Piece::new(color, PieceKind::Rook));

    if rights.kingside(color) && position.get_piece_at(kingside_rook_square(color)) == own_rook {
        let transit = Square::new(row, KINGSIDE_KING_TARGET_COL - 1);
        let target = Square::new(row, KINGSIDE_KING_TARGET_COL);
        if position.board().is_empty(transit)
            && position.board().is_empty(target)
            && !is_square_attacked(position, transit, enemy)
            && !is_square_attacked(position, target, enemy)
        {
            out.push(Move::new(king_from, target));
        }
    }

    if rights.queenside(color) && position.get_piece_at(queenside_rook_square(color)) == own_rook {
        let transit = Square::new(row, QUEENSIDE_KING_TARGET_COL + 1);
        let target = Square::new(row, QUEENSIDE_KING_TARGET_COL);
        let rook_path = Square::new(row, QUEENSIDE_KING_TARGET_COL - 1);
        if position.board().is_empty(transit)
            && position.board().is_empty(target)
            && position.board().is_empty(rook_path)
            && !is_square_attacked(position, transit, enemy)
            && !is_square_attacked(position, target, enemy)
        {
            out.push(Move::new(king_from, target));
        }
    }
}
