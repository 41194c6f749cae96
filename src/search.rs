//! Adversarial search engine

pub mod config;
pub mod minimax;

pub use config::SearchConfig;
pub use minimax::{Minimax, ScoredMove, SearchReport, SearchStats};
