//! Observer port - hooks for watching games as they are played

use crate::{
    Result,
    tictactoe::{Game, GameState, Move},
};

/// Observer trait for monitoring games
///
/// The arena calls the methods in this order for each game:
/// 1. `on_game_start(game_num, state)`
/// 2. `on_move(...)` after every applied move
/// 3. `on_game_end(game_num, game)`
///
/// All methods default to doing nothing.
pub trait GameObserver {
    fn on_game_start(&mut self, _game_num: usize, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// Called after `mv` has been applied; `after` is the resulting state.
    fn on_move(
        &mut self,
        _game_num: usize,
        _ply: usize,
        _mv: Move,
        _after: &GameState,
    ) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _game: &Game) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
