//! CLI infrastructure for the noughts engine
//!
//! This module provides the command-line interface for playing against,
//! benchmarking and inspecting the minimax engine.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output for this crate.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "noughts=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
