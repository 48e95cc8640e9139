//! Pawn pushes, double pushes, captures, en passant, and promotions.

use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;

pub fn generate_pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let board = position.board();
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            push_pawn_move(color, from, one_step, out);

            if from.row == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        match board.get(to) {
            Some(target) if target.color != color => push_pawn_move(color, from, to, out),
            None if position.en_passant_target() == Some(to) => out.push(Move::new(from, to)),
            _ => {}
        }
    }
}

fn push_pawn_move(color: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.row == color.promotion_row() {
        for promo in PROMOTION_CHOICES {
            out.push(Move::with_promotion(from, to, promo));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::initial_position;

    fn with_kings(extra: &[(Square, Piece)], side: Color, ep: Option<Square>) -> Position {
        let mut board = Board::empty()
            .with_piece(Square::new(7, 4), Piece::new(Color::White, PieceKind::King))
            .with_piece(Square::new(0, 4), Piece::new(Color::Black, PieceKind::King));
        for (square, piece) in extra {
            board.set(*square, Some(*piece));
        }
        Position::from_parts(board, side, CastlingRights::NONE, ep).expect("valid test position")
    }

    #[test]
    fn start_row_pawn_has_single_and_double_push() {
        let position = initial_position();
        let mut out = Vec::new();
        generate_pawn_moves(&position, Square::new(6, 4), Color::White, &mut out);
        assert_eq!(
            out,
            vec![
                Move::new(Square::new(6, 4), Square::new(5, 4)),
                Move::new(Square::new(6, 4), Square::new(4, 4)),
            ]
        );
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let blocker = Piece::new(Color::Black, PieceKind::Knight);
        let position = with_kings(
            &[
                (Square::new(6, 2), Piece::new(Color::White, PieceKind::Pawn)),
                (Square::new(4, 2), blocker),
            ],
            Color::White,
            None,
        );
        let mut out = Vec::new();
        generate_pawn_moves(&position, Square::new(6, 2), Color::White, &mut out);
        assert_eq!(out, vec![Move::new(Square::new(6, 2), Square::new(5, 2))]);

        let position = with_kings(
            &[
                (Square::new(6, 2), Piece::new(Color::White, PieceKind::Pawn)),
                (Square::new(5, 2), blocker),
            ],
            Color::White,
            None,
        );
        out.clear();
        generate_pawn_moves(&position, Square::new(6, 2), Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn captures_enemies_and_en_passant_target_only() {
        let position = with_kings(
            &[
                (Square::new(3, 4), Piece::new(Color::White, PieceKind::Pawn)),
                (Square::new(3, 3), Piece::new(Color::Black, PieceKind::Pawn)),
                (Square::new(2, 4), Piece::new(Color::Black, PieceKind::Rook)),
                (Square::new(2, 5), Piece::new(Color::White, PieceKind::Knight)),
            ],
            Color::White,
            Some(Square::new(2, 3)),
        );
        let mut out = Vec::new();
        generate_pawn_moves(&position, Square::new(3, 4), Color::White, &mut out);
        assert_eq!(out, vec![Move::new(Square::new(3, 4), Square::new(2, 3))]);
    }

    #[test]
    fn reaching_last_row_emits_every_promotion() {
        let position = with_kings(
            &[
                (Square::new(6, 0), Piece::new(Color::Black, PieceKind::Pawn)),
                (Square::new(7, 1), Piece::new(Color::White, PieceKind::Rook)),
            ],
            Color::Black,
            None,
        );
        let mut out = Vec::new();
        generate_pawn_moves(&position, Square::new(6, 0), Color::Black, &mut out);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|mv| mv.to.row == 7));
        let promotions: Vec<PieceKind> = out
            .iter()
            .filter(|mv| mv.to == Square::new(7, 1))
            .map(|mv| mv.promotion)
            .collect();
        assert_eq!(promotions, PROMOTION_CHOICES.to_vec());
    }
}
