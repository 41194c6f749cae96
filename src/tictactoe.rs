//! Tic-Tac-Toe board state engine

pub mod board;
pub mod game;
pub mod lines;
pub mod state;
pub mod validation;

pub use board::{Board, Cell, Move, PieceCount, Player};
pub use game::{Game, PlayedMove};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use state::{GameState, Outcome};
