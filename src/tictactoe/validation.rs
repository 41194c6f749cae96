//! Game state validation logic

use super::{board::Player, lines::LineAnalyzer, state::GameState};

impl GameState {
    /// Check if the state could arise from alternating legal moves
    pub fn is_valid(&self) -> bool {
        self.inconsistency().is_none()
    }

    /// Like [`is_valid`](Self::is_valid) but reports why a state is rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPieceCounts` unless X is level with O or one ahead,
    /// otherwise `InvalidConfiguration` naming the first violated rule.
    pub fn check_consistency(&self, context: &str) -> crate::Result<()> {
        let count = self.board().count_pieces();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }
        match self.inconsistency() {
            None => Ok(()),
            Some(reason) => Err(crate::Error::InvalidConfiguration {
                message: format!("invalid board '{context}': {reason}"),
            }),
        }
    }

    fn inconsistency(&self) -> Option<&'static str> {
        let count = self.board().count_pieces();
        let diff = count.x as isize - count.o as isize;

        // X always opens; equal counts allow either side to move.
        match (diff, self.current_player()) {
            (0, _) | (1, Player::O) => {}
            (1, Player::X) => return Some("X has an extra move, so it must be O's turn"),
            _ => return Some("X must be level with O or one piece ahead"),
        }

        let x_wins = self.board().has_won(Player::X);
        let o_wins = self.board().has_won(Player::O);

        if x_wins && o_wins {
            return Some("both players cannot have winning lines");
        }

        for (won, player) in [(x_wins, Player::X), (o_wins, Player::O)] {
            if !won {
                continue;
            }
            // The winner moved last, so the turn has passed to the opponent.
            if self.current_player() != player.opponent() {
                return Some("the winner cannot be the side to move");
            }
            if !Self::winning_lines_share_cell(self, player) {
                return Some("winning lines must share the final move's cell");
            }
        }

        None
    }

    /// Check if all winning lines for a player share at least one cell.
    /// Multiple lines can only be completed together by a single move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::complete_lines(&self.board().cells, player);
        if lines.len() < 2 {
            return true;
        }
        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }

    /// Count distinct states reachable from the empty board through `apply_move`
    pub fn count_reachable_states() -> usize {
        let mut stack = vec![GameState::new()];
        let mut seen = std::collections::HashSet::new();

        while let Some(state) = stack.pop() {
            if !seen.insert(state) {
                continue;
            }
            for mv in state.valid_moves() {
                if let Ok(next) = state.with_move(mv) {
                    stack.push(next);
                }
            }
        }

        seen.len()
    }
}
