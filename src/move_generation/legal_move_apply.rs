//! Functional move application.
//!
//! `apply_move` copies the position and applies en-passant bookkeeping,
//! promotion, castling rook relocation, castling-right revocation, and the
//! king-square cache update. The input move is assumed legal.

use crate::game_state::chess_rules::{
    castling_rook_squares, kingside_rook_square, queenside_rook_square,
};
use crate::game_state::chess_types::*;

pub fn apply_move(position: &Position, mv: Move) -> Position {
    let mut next = position.clone();
    let Some(moving) = next.board.take(mv.from) else {
        debug_assert!(false, "apply_move: no piece on start square {}", mv.from);
        return next;
    };
    let color = moving.color;
    let captured = next.board.get(mv.to);

    // En-passant target lives for exactly one ply.
    let double_push = moving.kind == PieceKind::Pawn && mv.from.row.abs_diff(mv.to.row) == 2;
    next.en_passant_target = if double_push {
        Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
    } else {
        None
    };

    if moving.kind == PieceKind::Pawn
        && position.en_passant_target == Some(mv.to)
        && mv.from.col != mv.to.col
    {
        next.board.set(Square::new(mv.from.row, mv.to.col), None);
    }

    let placed = if moving.kind == PieceKind::Pawn && mv.to.row == color.promotion_row() {
        Piece::new(color, promotion_kind(mv.promotion))
    } else {
        moving
    };

    match moving.kind {
        PieceKind::King => {
            if let Some((rook_from, rook_to)) = castling_rook_squares(mv.from, mv.to) {
                let rook = next.board.take(rook_from);
                next.board.set(rook_to, rook);
            }
            next.castling_rights.revoke_all(color);
            next.king_squares[color.index()] = mv.to;
        }
        PieceKind::Rook => revoke_for_rook_square(&mut next.castling_rights, color, mv.from),
        _ => {}
    }

    // A rook captured on its corner takes its right with it, moved or not.
    if let Some(victim) = captured {
        if victim.kind == PieceKind::Rook {
            revoke_for_rook_square(&mut next.castling_rights, victim.color, mv.to);
        }
    }

    next.board.set(mv.to, Some(placed));
    next.side_to_move = color.opposite();
    next
}

fn revoke_for_rook_square(rights: &mut CastlingRights, color: Color, square: Square) {
    if square == kingside_rook_square(color) {
        rights.revoke_kingside(color);
    } else if square == queenside_rook_square(color) {
        rights.revoke_queenside(color);
    }
}

/// Pawns and kings are not promotion targets; fall back to a queen.
#[inline]
fn promotion_kind(requested: PieceKind) -> PieceKind {
    match requested {
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => requested,
        PieceKind::Pawn | PieceKind::King => PieceKind::Queen,
    }
}
