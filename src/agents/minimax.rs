//! Optimal agent backed by the alpha-beta search

use crate::{
    Error, Result,
    ports::Agent,
    search::{Minimax, SearchConfig, SearchReport},
    tictactoe::{GameState, Move, Player},
};

/// Agent that always plays the minimax-optimal move for its side
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    name: String,
    player: Player,
    engine: Minimax,
    last_report: Option<SearchReport>,
}

impl MinimaxAgent {
    /// Agent for `player` with the default search configuration
    pub fn new(player: Player) -> Self {
        Self {
            name: format!("minimax-{player}"),
            player,
            engine: Minimax::default(),
            last_report: None,
        }
    }

    /// Agent for `player` with a custom configuration
    pub fn with_config(player: Player, config: SearchConfig) -> Result<Self> {
        Ok(Self {
            engine: Minimax::new(config)?,
            ..Self::new(player)
        })
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Report of the most recent search, if any
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, state: &GameState) -> Result<Move> {
        if state.current_player() != self.player {
            return Err(Error::WrongTurn {
                expected: self.player,
                actual: state.current_player(),
            });
        }
        let report = self.engine.search(state)?;
        self.last_report = Some(report);
        Ok(report.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_turn() {
        let mut agent = MinimaxAgent::new(Player::O);
        let err = agent.select_move(&GameState::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::WrongTurn {
                expected: Player::O,
                actual: Player::X
            }
        ));
        assert!(agent.last_report().is_none());
    }

    #[test]
    fn test_records_last_report() {
        let mut agent = MinimaxAgent::new(Player::X);
        let mv = agent.select_move(&GameState::new()).unwrap();
        let report = agent.last_report().unwrap();
        assert_eq!(report.best_move, mv);
        assert!(report.stats.nodes > 0);
        assert_eq!(agent.name(), "minimax-X");
    }

    #[test]
    fn test_rejects_finished_game() {
        let mut agent = MinimaxAgent::new(Player::O);
        let state: GameState = "XXXOO....".parse().unwrap();
        assert!(matches!(
            agent.select_move(&state),
            Err(Error::NoLegalMoves)
        ));
    }
}
