//! Agent port - abstraction over anything that picks moves

use crate::{
    Result,
    tictactoe::{GameState, Move},
};

/// Agent trait - unified interface for move selection
///
/// Implemented by the search engine, baselines such as a random player, and
/// the interactive console player. The returned move is a request: callers
/// apply it through [`GameState::apply_move`], never by writing cells.
///
/// # Examples
///
/// ```
/// use noughts::{
///     agents::MinimaxAgent,
///     ports::Agent,
///     tictactoe::{GameState, Player},
/// };
///
/// let mut agent = MinimaxAgent::new(Player::X);
/// let mut state = GameState::new();
/// let mv = agent.select_move(&state).unwrap();
/// state.apply_move(mv).unwrap();
/// ```
pub trait Agent {
    /// Select a move for the side to move in `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move is available (terminal state) or the
    /// agent cannot produce a move (e.g. input closed).
    fn select_move(&mut self, state: &GameState) -> Result<Move>;

    /// Get the agent's name.
    ///
    /// Used for identification in summaries and logging.
    fn name(&self) -> &str;
}
