//! Game record with move history

use serde::{Deserialize, Serialize};

use super::{
    board::{Move, Player},
    state::{GameState, Outcome},
};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    #[serde(flatten)]
    pub mv: Move,
    pub player: Player,
}

/// A complete game with history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub initial: GameState,
    pub moves: Vec<PlayedMove>,
    pub outcome: Outcome,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Create a game starting from an arbitrary position
    pub fn from_state(initial: GameState) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: initial.outcome(),
        }
    }

    /// Play a move through `GameState::apply_move` and record it
    pub fn play(&mut self, mv: Move) -> crate::Result<()> {
        let mut state = self.current_state()?;
        let player = state.current_player();
        state.apply_move(mv)?;

        self.moves.push(PlayedMove { mv, player });
        self.outcome = state.outcome();
        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is illegal, which indicates
    /// corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> crate::Result<GameState> {
        let mut state = self.initial;
        for m in self.moves.iter().take(end_index) {
            state.apply_move(m.mv)?;
        }
        Ok(state)
    }

    /// Get current game state
    pub fn current_state(&self) -> crate::Result<GameState> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of states, starting with the initial one
    pub fn state_sequence(&self) -> crate::Result<Vec<GameState>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);

        for m in &self.moves {
            state.apply_move(m.mv)?;
            states.push(state);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_moves() {
        let mut game = Game::new();
        game.play(Move::new(0, 0)).unwrap();
        game.play(Move::new(1, 1)).unwrap();

        assert_eq!(game.moves.len(), 2);
        assert_eq!(game.moves[0].player, Player::X);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(game.outcome, Outcome::Undecided);
    }

    #[test]
    fn test_illegal_move_not_recorded() {
        let mut game = Game::new();
        game.play(Move::new(0, 0)).unwrap();
        assert!(game.play(Move::new(0, 0)).is_err());
        assert!(game.play(Move::new(0, 5)).is_err());
        assert_eq!(game.moves.len(), 1);
    }

    #[test]
    fn test_outcome_and_rejection_after_end() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
            game.play(Move::new(row, col)).unwrap();
        }
        assert_eq!(game.outcome, Outcome::Won(Player::X));
        assert!(game.is_over());
        assert!(matches!(
            game.play(Move::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_state_sequence() {
        let mut game = Game::new();
        game.play(Move::new(1, 1)).unwrap();
        game.play(Move::new(0, 0)).unwrap();

        let states = game.state_sequence().unwrap();
        assert_eq!(states.len(), 3);
        assert_eq!(states[0], GameState::new());
        assert_eq!(states[2], game.current_state().unwrap());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut game = Game::new();
        game.play(Move::new(2, 0)).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"row\":2"));
        let parsed: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, game);
    }
}
