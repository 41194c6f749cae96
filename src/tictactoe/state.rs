//! Game state: board, side to move and terminal outcome

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, PieceCount, Player};

/// Result of a game at a given point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game still in progress
    Undecided,
    Draw,
    Won(Player),
}

impl Outcome {
    /// Reward from the maximizing (X) perspective, `None` while undecided
    pub fn reward(self) -> Option<f64> {
        match self {
            Outcome::Undecided => None,
            Outcome::Draw => Some(0.0),
            Outcome::Won(player) => Some(player.win_reward()),
        }
    }

    pub fn is_decided(self) -> bool {
        self != Outcome::Undecided
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "in progress"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Won(player) => write!(f, "{player} wins"),
        }
    }
}

/// Board plus side to move and outcome.
///
/// `GameState` is `Copy` (11 bytes), so searches explore successors by value
/// and never need to undo a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

impl GameState {
    /// Empty board, X to move
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::Undecided,
        }
    }

    /// Wrap an existing board, evaluating its outcome.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
            outcome: Self::evaluate(&board),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Apply a move for the side to move.
    ///
    /// Fails without touching the state if the game is over, the coordinates
    /// fall outside the board, or the target cell is occupied. On success the
    /// outcome is re-evaluated and the turn passes to the opponent, including
    /// on the move that ends the game.
    pub fn apply_move(&mut self, mv: Move) -> crate::Result<()> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        let idx = mv.index().ok_or(crate::Error::OutOfBounds {
            row: mv.row,
            col: mv.col,
        })?;
        if !self.board.is_empty(mv) {
            return Err(crate::Error::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }

        self.board.set(idx, self.current_player.to_cell());
        self.outcome = Self::evaluate(&self.board);
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Boolean form of [`apply_move`](Self::apply_move)
    pub fn try_apply_move(&mut self, row: usize, col: usize) -> bool {
        self.apply_move(Move::new(row, col)).is_ok()
    }

    /// Successor state after a move; `self` is unchanged
    #[must_use = "with_move returns a new state; the original is unchanged"]
    pub fn with_move(&self, mv: Move) -> crate::Result<GameState> {
        let mut next = *self;
        next.apply_move(mv)?;
        Ok(next)
    }

    /// All empty cells in row-major order
    pub fn valid_moves(&self) -> Vec<Move> {
        self.board.empty_cells()
    }

    /// True once a line is complete or the board is full
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_decided()
    }

    /// `None` while the game is running, otherwise 1.0 / 0.0 / -1.0 for X win / draw / O win
    pub fn winner_reward(&self) -> Option<f64> {
        self.outcome.reward()
    }

    /// Return to the initial empty position with X to move
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    /// Canonical key such as `XO......._X`
    pub fn encode(&self) -> String {
        format!("{}_{}", self.board.encode(), self.current_player.symbol())
    }

    /// Line wins take precedence over a full board
    fn evaluate(board: &Board) -> Outcome {
        if let Some(player) = board.line_winner() {
            Outcome::Won(player)
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    fn determine_turn_from_counts(count: &PieceCount) -> crate::Result<Player> {
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    fn split_board_and_turn(cleaned: &str) -> crate::Result<(&str, Option<Player>)> {
        match cleaned.split_once('_') {
            Some((board, suffix)) => {
                let player = match suffix {
                    "X" | "x" => Player::X,
                    "O" | "o" => Player::O,
                    _ => {
                        return Err(crate::Error::InvalidPlayerString {
                            player: suffix.to_string(),
                            context: cleaned.to_string(),
                        });
                    }
                };
                Ok((board, Some(player)))
            }
            None => Ok((cleaned, None)),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for GameState {
    type Err = crate::Error;

    /// Parse a board string of 9 cells (whitespace ignored) with an optional
    /// `_X`/`_O` suffix naming the side to move. Without a suffix the side to
    /// move is inferred from the piece counts.
    fn from_str(s: &str) -> crate::Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned)?;
        let board = Board::parse_cells(board_part, s)?;
        let count = board.count_pieces();

        let current_player = match specified_turn {
            Some(turn) => turn,
            None => Self::determine_turn_from_counts(&count)?,
        };

        let state = GameState::from_board(board, current_player);
        state.check_consistency(s)?;
        Ok(state)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
