//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Side length of the board
pub const SIZE: usize = 3;

/// Number of cells on the board
pub const CELLS: usize = SIZE * SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
///
/// X always moves first and is the maximizing side for search rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Whether this side maximizes the reward signal
    pub fn is_maximizing(self) -> bool {
        self == Player::X
    }

    /// Reward for a game won by this player
    pub fn win_reward(self) -> f64 {
        match self {
            Player::X => 1.0,
            Player::O => -1.0,
        }
    }

    pub fn symbol(self) -> char {
        self.to_cell().to_char()
    }

    /// Parse a player token such as `x`, `O` or `X`.
    pub fn parse_token(token: &str) -> crate::Result<Player> {
        match token.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: token.to_string(),
                context: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A move as a (row, col) pair.
///
/// Coordinates are not checked on construction; `GameState::apply_move`
/// rejects anything outside `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Build a move from a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Self {
        Move {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Row-major cell index, or `None` when out of bounds
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then_some(self.row * SIZE + self.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// The 3x3 grid of cells, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Get the cell at a move's coordinates, or `None` when out of bounds
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|idx| self.cells[idx])
    }

    /// Check if the target cell exists and is empty
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Some(Cell::Empty)
    }

    pub(crate) fn set(&mut self, idx: usize, cell: Cell) {
        self.cells[idx] = cell;
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Owner of the first complete line in scan order, if any
    pub fn line_winner(&self) -> Option<Player> {
        LineAnalyzer::first_complete_line(&self.cells).and_then(|line| self.cells[line[0]].player())
    }

    /// Check if a player owns a complete line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Parse the nine cell characters of a board string.
    ///
    /// # Errors
    ///
    /// Returns error unless there are exactly 9 characters, all valid cells.
    pub fn parse_cells(board: &str, context: &str) -> crate::Result<Board> {
        let chars: Vec<char> = board.chars().collect();
        if chars.len() != CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Compact nine-character encoding, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            write!(f, "|")?;
            for col in 0..SIZE {
                let symbol = match self.cells[row * SIZE + col] {
                    Cell::Empty => ' ',
                    cell => cell.to_char(),
                };
                write!(f, " {symbol} |")?;
            }
            writeln!(f)?;
            if row < SIZE - 1 {
                writeln!(f, "|---|---|---|")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert!(board.cells.iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new();
        board.set(4, Cell::X);
        board.set(0, Cell::O);

        let empty = board.empty_cells();
        assert_eq!(
            empty,
            vec![
                Move::new(0, 1),
                Move::new(0, 2),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 0),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_move_index() {
        assert_eq!(Move::new(0, 0).index(), Some(0));
        assert_eq!(Move::new(1, 2).index(), Some(5));
        assert_eq!(Move::new(2, 2).index(), Some(8));
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(0, 3).index(), None);
        assert_eq!(Move::from_index(7), Move::new(2, 1));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(Move::new(3, 1)), None);
        assert!(!board.is_empty(Move::new(3, 1)));
        assert!(board.is_empty(Move::new(2, 1)));
    }

    #[test]
    fn test_parse_cells() {
        let board = Board::parse_cells("XOX......", "XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);

        let err = Board::parse_cells("XO", "XO").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength { expected: 9, got: 2, .. }
        ));

        let err = Board::parse_cells("XO.......XXXXXX", "XO.......XXXXXX").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidBoardLength { got: 15, .. }));

        let err = Board::parse_cells("XOZ......", "XOZ......").unwrap_err();
        assert!(err.to_string().contains("'Z'"));
    }

    #[test]
    fn test_line_winner() {
        let board = Board::parse_cells("XXXOO....", "").unwrap();
        assert_eq!(board.line_winner(), Some(Player::X));

        let board = Board::parse_cells("XX.OOO X.", "").unwrap();
        assert_eq!(board.line_winner(), Some(Player::O));

        let board = Board::parse_cells("XOXXOOOXX", "").unwrap();
        assert_eq!(board.line_winner(), None);
        assert!(board.is_full());
    }

    #[test]
    fn test_display() {
        let board = Board::parse_cells("XO..X...O", "").unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "| X | O |   |");
        assert_eq!(lines[1], "|---|---|---|");
        assert_eq!(lines[2], "|   | X |   |");
        assert_eq!(lines[4], "|   |   | O |");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_player_tokens() {
        assert_eq!(Player::parse_token("x").unwrap(), Player::X);
        assert_eq!(Player::parse_token(" O ").unwrap(), Player::O);
        assert!(Player::parse_token("z").is_err());
        assert_eq!(Player::X.opponent(), Player::O);
        assert!(Player::X.is_maximizing());
        assert!(!Player::O.is_maximizing());
    }
}
