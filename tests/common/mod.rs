//! Shared helpers for the integration tests.

#![allow(dead_code)]

use noughts::{GameState, Move};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded generator so failures reproduce
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Play uniformly random legal moves until the game ends.
///
/// Returns every state visited, starting with the empty board.
pub fn random_playout(rng: &mut StdRng) -> Vec<GameState> {
    let mut state = GameState::new();
    let mut states = vec![state];
    while !state.is_terminal() {
        let moves = state.valid_moves();
        let mv = moves[rng.random_range(0..moves.len())];
        state.apply_move(mv).unwrap();
        states.push(state);
    }
    states
}

/// Shorthand for `Move::new`
pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col)
}
