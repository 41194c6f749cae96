//! Optimal Tic-Tac-Toe through exhaustive adversarial search
//!
//! This crate provides:
//! - A 3x3 board state engine with move legality, terminal detection and rewards
//! - An alpha-beta minimax search that returns the optimal move for the side to move
//! - Agents, a game arena and a command-line driver built on those two pieces

pub mod agents;
pub mod arena;
pub mod cli;
pub mod error;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Minimax, SearchConfig, SearchReport};
pub use tictactoe::{GameState, Move, Outcome, Player};
