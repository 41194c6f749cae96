//! Running games between agents

pub mod observers;
pub mod runner;

pub use observers::ProgressObserver;
pub use runner::{SeriesSummary, play_from, play_game, play_series};
