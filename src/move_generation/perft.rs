//! Perft: leaf counts of the legal-move tree.
//!
//! Positions are immutable values, so the threaded variant hands each root
//! subtree to its own worker without any locking.

use std::sync::Arc;
use std::thread;

use thiserror::Error;
use tracing::{info, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{generate_legal_moves, LegalMoveGenerator};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

#[derive(Debug, Error)]
pub enum PerftError {
    #[error("perft worker for root move {0} panicked")]
    WorkerPanicked(Move),
}

/// Leaf statistics using `generator` for every node.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(position) {
        perft_recurse(generator, &mv, depth, 1, &mut total);
    }
    total
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;
        let annotations = mv.annotations;
        counts.captures += u64::from(annotations.is_capture);
        counts.en_passant += u64::from(annotations.is_en_passant);
        counts.castles += u64::from(annotations.is_castling);
        counts.promotions += u64::from(annotations.is_promotion);
        counts.checks += u64::from(annotations.gives_check);
        counts.checkmates += u64::from(annotations.is_checkmate);
        return;
    }

    for child in generator.generate_legal_moves(&mv.position_after_move) {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts);
    }
}

/// Node count only, with bulk counting at the last ply.
pub fn perft_nodes(position: &Position, depth: u8) -> u64 {
    match depth {
        0 => 1,
        1 => generate_legal_moves(position).len() as u64,
        _ => generate_legal_moves(position)
            .iter()
            .map(|generated| perft_nodes(&generated.position_after_move, depth - 1))
            .sum(),
    }
}

/// Node count below each root move, in generation order.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    generate_legal_moves(position)
        .into_iter()
        .map(|generated| {
            let nodes = perft_nodes(&generated.position_after_move, depth - 1);
            (generated.chess_move, nodes)
        })
        .collect()
}

/// Annotated perft with one worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    position: &Position,
    depth: u8,
) -> Result<PerftCounts, PerftError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(position);
    info!(depth, root_moves = root_moves.len(), "starting threaded perft");

    let mut handles = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = mv.chess_move;
        handles.push((
            root,
            thread::spawn(move || {
                trace!(%root, "perft worker started");
                let mut local = PerftCounts::default();
                perft_recurse(generator_ref.as_ref(), &mv, depth, 1, &mut local);
                local
            }),
        ));
    }

    let mut total = PerftCounts::default();
    for (root, handle) in handles {
        let local = handle.join().map_err(|_| PerftError::WorkerPanicked(root))?;
        total.merge(local);
    }

    Ok(total)
}

/// Annotated perft with the default generator.
#[inline]
pub fn perft_legal(position: &Position, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, position, depth)
}
