//! Perft runner.
//!
//! Usage:
//! `cargo run --release -- --depth 5`
//! `cargo run --release -- --depth 4 --divide`
//! `RUST_LOG=debug cargo run --release -- --threads`

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use plum_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_rules::move_generation::perft::{perft_divide, perft_legal, perft_multi_threaded};
use plum_rules::utils::perft_config::PerftConfig;
use plum_rules::utils::render_position::render_position;
use plum_rules::initial_position;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match PerftConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "bad arguments");
            return ExitCode::FAILURE;
        }
    };

    let position = initial_position();
    println!("{}\n", render_position(&position));

    let started = Instant::now();
    if config.divide {
        let divide = perft_divide(&position, config.depth);
        let mut total = 0u64;
        for (mv, nodes) in &divide {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!("\nNodes searched: {total}");
    } else {
        let counts = if config.threaded {
            match perft_multi_threaded(Arc::new(LegalMoveGenerator), &position, config.depth) {
                Ok(counts) => counts,
                Err(err) => {
                    error!(%err, "threaded perft failed");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            perft_legal(&position, config.depth)
        };
        println!("{counts:#?}");
    }

    info!(
        depth = config.depth,
        elapsed = ?started.elapsed(),
        "perft finished"
    );
    ExitCode::SUCCESS
}
