//! Random-move engine.
//!
//! Picks uniformly among legal moves. Used for diagnostics, random playouts in
//! tests, and as the simplest search collaborator.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineError, EngineOutput};
use crate::game::game_status::game_status;
use crate::game_state::chess_types::*;

pub struct RandomEngine {
    rng: StdRng,
    // Set for seeded engines so `new_game` replays the same choices.
    seed: Option<u64>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Reproducible sequence of choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumRules Random"
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    fn choose_move(&mut self, position: &Position) -> Result<EngineOutput, EngineError> {
        let legal_moves = position.get_legal_moves();
        let Some(&picked) = legal_moves.choose(&mut self.rng) else {
            return Err(EngineError::GameOver(game_status(position)));
        };
        debug!(
            engine = self.name(),
            chosen = %picked,
            candidates = legal_moves.len(),
            "random engine picked move"
        );

        Ok(EngineOutput {
            best_move: picked,
            info_lines: vec![format!(
                "info string {} legal_moves {}",
                self.name(),
                legal_moves.len()
            )],
        })
    }
}
