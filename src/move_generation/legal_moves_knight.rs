//! Knight jumps: the eight L-offsets onto empty or enemy squares.

use crate::game_state::chess_types::*;
use crate::move_generation::move_directions::KNIGHT_OFFSETS;

pub fn generate_knight_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match position.get_piece_at(to) {
            Some(target) if target.color == color => {}
            _ => out.push(Move::new(from, to)),
        }
    }
}
