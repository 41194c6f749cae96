//! Move-selecting agents

pub mod minimax;
pub mod random;

pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
