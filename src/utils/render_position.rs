//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, the perft runner, and
//! diagnostics in text environments.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string, row 0 at the top.
///
/// Row and column indices are printed along the edges.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..8u8 {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for col in 0..8u8 {
            match position.get_piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out.push_str(&format!("{:?} to move", position.side_to_move()));
    if let Some(target) = position.en_passant_target() {
        out.push_str(&format!(", en passant {target}"));
    }

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
