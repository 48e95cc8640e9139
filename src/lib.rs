//! Crate root module declarations for the Plum rules engine.
//!
//! This file exposes the rules subsystems (position model, move generation,
//! perft, the live game wrapper, a minimal search collaborator, and utility
//! helpers) so the binary, benches, and external tooling can import stable
//! module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod position_error;
    #[cfg(test)]
    pub(crate) mod test_positions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_slider;
    pub mod move_directions;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal_moves;
}

pub mod game {
    #[allow(clippy::module_inception)]
    pub mod game;
    pub mod game_status;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod perft_config;
    pub mod render_position;
}

pub use game_state::chess_types::{
    Board, CastlingRights, Color, Move, Piece, PieceKind, Position, Square,
};
pub use game_state::position::initial_position;
