//! Immutable position snapshot.
//!
//! A `Position` is a value: board, side to move, castling rights, en-passant
//! target, and the cached king squares. Every transition goes through
//! [`Position::after_move`], which returns a new value and leaves the receiver
//! untouched, so any number of descendants can coexist during tree search.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::position_error::PositionError;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, legal_moves_from, move_is_legal,
};
use crate::move_generation::pseudo_legal_moves::generate_pseudo_legal_moves;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    // [color index] -> square of that color's king.
    pub(crate) king_squares: [Square; 2],
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

/// Standard starting position.
#[inline]
pub fn initial_position() -> Position {
    Position::initial()
}

impl Position {
    /// Standard starting arrangement, full castling rights, White to move.
    pub fn initial() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
        }
    }

    /// Compose a position from its parts.
    ///
    /// Requires exactly one king of each color. Castling rights are taken as
    /// given; a right whose king or rook is not on its home square simply never
    /// yields a castling move.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Result<Self, PositionError> {
        let white_king = single_king(&board, Color::White)?;
        let black_king = single_king(&board, Color::Black)?;

        if let Some(target) = en_passant_target {
            if target.row != 2 && target.row != 5 {
                return Err(PositionError::InvalidEnPassantTarget(target));
            }
        }

        Ok(Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            king_squares: [white_king, black_king],
        })
    }

    /// Starting point for composing a board to pass to [`Position::from_parts`].
    #[inline]
    pub fn empty_board() -> Board {
        Board::empty()
    }

    #[inline]
    pub fn get_piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    /// Independent copy of the board.
    #[inline]
    pub fn get_board_copy(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        is_square_attacked(self, square, by_color)
    }

    /// Whether the side to move is in check.
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        generate_pseudo_legal_moves(self, &mut out);
        out
    }

    pub fn get_legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(self)
            .into_iter()
            .map(|generated| generated.chess_move)
            .collect()
    }

    /// Legal moves starting on `square`.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        legal_moves_from(self, square)
    }

    /// True if some legal move goes from `start` to `end`, whatever its promotion.
    pub fn is_legal_move(&self, start: Square, end: Square) -> bool {
        self.legal_moves_from(start).iter().any(|mv| mv.to == end)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        move_is_legal(self, mv)
    }

    /// Whether moving the piece on `start` to `end` would promote a pawn.
    pub fn is_promotion(&self, start: Square, end: Square) -> bool {
        match self.board.get(start) {
            Some(piece) => {
                piece.kind == PieceKind::Pawn && end.row == piece.color.promotion_row()
            }
            None => false,
        }
    }

    /// Position after `start -> end`, promoting to `promotion` when a pawn
    /// reaches its last row. The move is assumed legal and is not re-validated.
    pub fn after_move(
        &self,
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
    ) -> Position {
        let mv = Move::with_promotion(start, end, promotion.unwrap_or(PieceKind::Queen));
        apply_move(self, mv)
    }

    #[inline]
    pub fn after(&self, mv: Move) -> Position {
        apply_move(self, mv)
    }
}

fn single_king(board: &Board, color: Color) -> Result<Square, PositionError> {
    let mut kings = board.find(Piece::new(color, PieceKind::King));
    let first = kings.next().ok_or(PositionError::MissingKing(color))?;
    let extra = kings.count();
    if extra > 0 {
        return Err(PositionError::TooManyKings {
            color,
            count: extra + 1,
        });
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_caches_both_kings() {
        let position = initial_position();
        assert_eq!(position.king_square(Color::White), Square::new(7, 4));
        assert_eq!(position.king_square(Color::Black), Square::new(0, 4));
        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.castling_rights(), CastlingRights::ALL);
        assert_eq!(position.en_passant_target(), None);
        assert!(!position.is_in_check());
    }

    #[test]
    fn from_parts_requires_one_king_per_color() {
        let only_white = Board::empty().with_piece(
            Square::new(7, 4),
            Piece::new(Color::White, PieceKind::King),
        );
        assert_eq!(
            Position::from_parts(only_white, Color::White, CastlingRights::NONE, None),
            Err(PositionError::MissingKing(Color::Black))
        );

        let two_black = only_white
            .with_piece(Square::new(0, 0), Piece::new(Color::Black, PieceKind::King))
            .with_piece(Square::new(0, 7), Piece::new(Color::Black, PieceKind::King));
        assert_eq!(
            Position::from_parts(two_black, Color::White, CastlingRights::NONE, None),
            Err(PositionError::TooManyKings {
                color: Color::Black,
                count: 2
            })
        );
    }

    #[test]
    fn from_parts_derives_king_squares() {
        let board = Position::empty_board()
            .with_piece(Square::new(3, 3), Piece::new(Color::White, PieceKind::King))
            .with_piece(Square::new(1, 6), Piece::new(Color::Black, PieceKind::King));
        let position = Position::from_parts(board, Color::Black, CastlingRights::NONE, None)
            .expect("two kings should compose");
        assert_eq!(position.king_square(Color::White), Square::new(3, 3));
        assert_eq!(position.king_square(Color::Black), Square::new(1, 6));
    }

    #[test]
    fn from_parts_rejects_misplaced_en_passant_target() {
        let board = Board::empty()
            .with_piece(Square::new(7, 4), Piece::new(Color::White, PieceKind::King))
            .with_piece(Square::new(0, 4), Piece::new(Color::Black, PieceKind::King));
        let err = Position::from_parts(
            board,
            Color::White,
            CastlingRights::NONE,
            Some(Square::new(4, 4)),
        )
        .unwrap_err();
        assert_eq!(err, PositionError::InvalidEnPassantTarget(Square::new(4, 4)));
    }

    #[test]
    fn board_copy_is_independent() {
        let position = initial_position();
        let mut copy = position.get_board_copy();
        copy.take(Square::new(7, 4));
        assert!(position.get_piece_at(Square::new(7, 4)).is_some());
    }

    #[test]
    fn is_promotion_only_for_pawns_reaching_last_row() {
        let board = Board::empty()
            .with_piece(Square::new(7, 4), Piece::new(Color::White, PieceKind::King))
            .with_piece(Square::new(0, 0), Piece::new(Color::Black, PieceKind::King))
            .with_piece(Square::new(1, 4), Piece::new(Color::White, PieceKind::Pawn))
            .with_piece(Square::new(1, 6), Piece::new(Color::White, PieceKind::Rook));
        let position =
            Position::from_parts(board, Color::White, CastlingRights::NONE, None).unwrap();
        assert!(position.is_promotion(Square::new(1, 4), Square::new(0, 4)));
        assert!(!position.is_promotion(Square::new(1, 6), Square::new(0, 6)));
        assert!(!initial_position().is_promotion(Square::new(6, 4), Square::new(4, 4)));
    }

    #[test]
    fn pseudo_legal_moves_include_pinned_piece_moves() {
        let board = Position::empty_board()
            .with_piece(Square::new(7, 4), Piece::new(Color::White, PieceKind::King))
            .with_piece(Square::new(5, 4), Piece::new(Color::White, PieceKind::Knight))
            .with_piece(Square::new(1, 4), Piece::new(Color::Black, PieceKind::Rook))
            .with_piece(Square::new(0, 0), Piece::new(Color::Black, PieceKind::King));
        let position =
            Position::from_parts(board, Color::White, CastlingRights::NONE, None).unwrap();
        // 8 knight jumps plus 5 king steps; only the king steps survive the pin.
        assert_eq!(position.pseudo_legal_moves().len(), 13);
        assert_eq!(position.get_legal_moves().len(), 5);
        assert_eq!(initial_position().pseudo_legal_moves().len(), 20);
    }

    #[test]
    fn random_playouts_preserve_position_invariants() {
        use rand::prelude::IndexedRandom;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..40 {
            let mut position = initial_position();
            for _ in 0..120 {
                let moves = position.get_legal_moves();
                let Some(&mv) = moves.choose(&mut rng) else {
                    break;
                };
                let mover = position.side_to_move();
                let moved = position.get_piece_at(mv.from).expect("legal move has a piece");
                let next = position.after(mv);

                assert_eq!(next, position.after(mv), "after_move must be deterministic");
                for color in [Color::White, Color::Black] {
                    let kings: Vec<Square> =
                        next.board().find(Piece::new(color, PieceKind::King)).collect();
                    assert_eq!(kings, vec![next.king_square(color)]);
                }
                assert!(!next.is_square_attacked(next.king_square(mover), mover.opposite()));
                assert!(next.castling_rights().is_subset_of(position.castling_rights()));

                let double_push =
                    moved.kind == PieceKind::Pawn && mv.from.row.abs_diff(mv.to.row) == 2;
                if double_push {
                    let passed = Square::new((mv.from.row + mv.to.row) / 2, mv.from.col);
                    assert_eq!(next.en_passant_target(), Some(passed));
                } else {
                    assert_eq!(next.en_passant_target(), None);
                }
                assert_eq!(next.side_to_move(), mover.opposite());

                position = next;
            }
        }
    }

    #[test]
    fn scenario_en_passant_target_lives_one_ply() {
        let after_push =
            initial_position().after_move(Square::new(6, 4), Square::new(4, 4), None);
        assert_eq!(after_push.en_passant_target(), Some(Square::new(5, 4)));
        let after_reply = after_push.after_move(Square::new(0, 1), Square::new(2, 2), None);
        assert_eq!(after_reply.en_passant_target(), None);
    }

    #[test]
    fn scenario_white_castles_kingside() {
        let board = Board::empty()
            .with_piece(Square::new(7, 4), Piece::new(Color::White, PieceKind::King))
            .with_piece(Square::new(7, 7), Piece::new(Color::White, PieceKind::Rook))
            .with_piece(Square::new(0, 4), Piece::new(Color::Black, PieceKind::King));
        let position =
            Position::from_parts(board, Color::White, CastlingRights::ALL, None).unwrap();
        let castle = Move::new(Square::new(7, 4), Square::new(7, 6));
        assert!(position.get_legal_moves().contains(&castle));

        let next = position.after(castle);
        assert_eq!(
            next.get_piece_at(Square::new(7, 5)),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(
            next.get_piece_at(Square::new(7, 6)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert!(!next.castling_rights().white_kingside);
        assert!(!next.castling_rights().white_queenside);
    }

    #[test]
    fn scenario_underpromotion_to_knight() {
        let board = Board::empty()
            .with_piece(Square::new(7, 4), Piece::new(Color::White, PieceKind::King))
            .with_piece(Square::new(2, 0), Piece::new(Color::Black, PieceKind::King))
            .with_piece(Square::new(1, 4), Piece::new(Color::White, PieceKind::Pawn));
        let position =
            Position::from_parts(board, Color::White, CastlingRights::NONE, None).unwrap();
        let next = position.after_move(
            Square::new(1, 4),
            Square::new(0, 4),
            Some(PieceKind::Knight),
        );
        assert_eq!(
            next.get_piece_at(Square::new(0, 4)),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(position.get_piece_at(Square::new(0, 4)), None);
    }
}
