//! Legal-move generator seam and the per-move payload it returns.

use crate::game_state::chess_types::*;

/// Facts about a legal move, filled in by annotating generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub is_capture: bool,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub is_promotion: bool,
    pub gives_check: bool,
    pub is_checkmate: bool,
}

/// A legal move paired with the position it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub chess_move: Move,
    pub position_after_move: Position,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, position: &Position) -> Vec<GeneratedMove>;
}
