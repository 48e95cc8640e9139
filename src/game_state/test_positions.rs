//! Test fixtures: positions drawn as eight row strings, row 0 first.
//!
//! Uppercase letters are White, lowercase Black, `.` is empty.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn from_rows(
    rows: [&str; 8],
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
) -> Position {
    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "row {row} must have 8 squares");
        for (col, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("unknown piece letter {other}"),
            };
            board.set(Square::new(row as u8, col as u8), Some(Piece::new(color, kind)));
        }
    }
    Position::from_parts(board, side_to_move, castling_rights, en_passant_target)
        .expect("fixture should have one king per color")
}

/// Middlegame with every castling right, pins, and an en-passant chance.
pub fn kiwipete() -> Position {
    from_rows(
        [
            "r...k..r", //
            "p.ppqpb.", //
            "bn..pnp.", //
            "...PN...", //
            ".p..P...", //
            "..N..Q.p", //
            "PPPBBPPP", //
            "R...K..R", //
        ],
        Color::White,
        CastlingRights::ALL,
        None,
    )
}

/// Sparse rook-and-pawns ending with a horizontal en-passant pin.
pub fn rook_endgame() -> Position {
    from_rows(
        [
            "........", //
            "..p.....", //
            "...p....", //
            "KP.....r", //
            ".R...p.k", //
            "........", //
            "....P.P.", //
            "........", //
        ],
        Color::White,
        CastlingRights::NONE,
        None,
    )
}
