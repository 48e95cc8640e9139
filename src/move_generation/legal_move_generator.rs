//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves, applies each to a trial position, and drops
//! any that leave the mover's own king attacked. The annotating generator also
//! records capture/castle/promotion flags and check/checkmate outcomes.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{GeneratedMove, MoveAnnotations, MoveGenerator};
use crate::move_generation::pseudo_legal_moves::{
    generate_piece_moves, generate_pseudo_legal_moves,
};

pub struct LegalMoveGenerator;
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<GeneratedMove> {
        generate_legal_moves_internal(position, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<GeneratedMove> {
        generate_legal_moves_internal(position, false)
    }
}

/// Legal moves of the side to move, without annotations.
#[inline]
pub fn generate_legal_moves(position: &Position) -> Vec<GeneratedMove> {
    generate_legal_moves_internal(position, false)
}

fn generate_legal_moves_internal(position: &Position, annotate: bool) -> Vec<GeneratedMove> {
    let mut pseudo = Vec::<Move>::with_capacity(64);
    generate_pseudo_legal_moves(position, &mut pseudo);

    let mut legal = Vec::<GeneratedMove>::with_capacity(pseudo.len());
    for mv in pseudo {
        let Some(next) = trial_position(position, mv) else {
            continue;
        };

        let annotations = if annotate {
            classify_move_annotations(position, mv, &next)
        } else {
            MoveAnnotations::default()
        };

        legal.push(GeneratedMove {
            chess_move: mv,
            position_after_move: next,
            annotations,
        });
    }

    legal
}

/// Position after `mv`, or `None` if the mover's king would be attacked.
#[inline]
fn trial_position(position: &Position, mv: Move) -> Option<Position> {
    let next = apply_move(position, mv);
    // The cached king square already reflects a king move.
    if is_king_in_check(&next, position.side_to_move()) {
        None
    } else {
        Some(next)
    }
}

/// Legal moves of the piece on `square`; empty when that square holds no
/// piece of the side to move.
pub fn legal_moves_from(position: &Position, square: Square) -> Vec<Move> {
    let Some(piece) = position.get_piece_at(square) else {
        return Vec::new();
    };
    if piece.color != position.side_to_move() {
        return Vec::new();
    }

    let mut pseudo = Vec::<Move>::with_capacity(28);
    generate_piece_moves(position, square, piece, &mut pseudo);
    pseudo
        .into_iter()
        .filter(|mv| trial_position(position, *mv).is_some())
        .collect()
}

/// Whether `mv` is legal. The promotion kind must match only when the move
/// actually promotes.
pub fn move_is_legal(position: &Position, mv: Move) -> bool {
    let promoting = position.is_promotion(mv.from, mv.to);
    legal_moves_from(position, mv.from).iter().any(|candidate| {
        candidate.to == mv.to && (!promoting || candidate.promotion == mv.promotion)
    })
}

fn classify_move_annotations(prev: &Position, mv: Move, next: &Position) -> MoveAnnotations {
    let moved = prev.get_piece_at(mv.from);
    let is_pawn = moved.is_some_and(|p| p.kind == PieceKind::Pawn);
    let is_king = moved.is_some_and(|p| p.kind == PieceKind::King);

    let is_en_passant =
        is_pawn && prev.en_passant_target() == Some(mv.to) && mv.from.col != mv.to.col;
    let is_capture = prev.get_piece_at(mv.to).is_some() || is_en_passant;
    let is_castling = is_king && mv.from.col.abs_diff(mv.to.col) == 2;
    let is_promotion = prev.is_promotion(mv.from, mv.to);

    let gives_check = next.is_in_check();
    let is_checkmate = gives_check && generate_legal_moves(next).is_empty();

    MoveAnnotations {
        is_capture,
        is_en_passant,
        is_castling,
        is_promotion,
        gives_check,
        is_checkmate,
    }
}
