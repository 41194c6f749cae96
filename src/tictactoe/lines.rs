//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in terminal scan order.
///
/// Rows and columns are interleaved per index (row 0, column 0, row 1, ...),
/// followed by the main diagonal and the anti-diagonal.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // row 0
    [0, 3, 6], // col 0
    [3, 4, 5], // row 1
    [1, 4, 7], // col 1
    [6, 7, 8], // row 2
    [2, 5, 8], // col 2
    [0, 4, 8], // diagonal
    [2, 4, 6], // anti-diagonal
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line in scan order fully occupied by a single player
    pub fn first_complete_line(cells: &[Cell; 9]) -> Option<&'static [usize; 3]> {
        WINNING_LINES.iter().find(|line| {
            let first = cells[line[0]];
            first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first)
        })
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// All lines fully owned by the player
    pub fn complete_lines(cells: &[Cell; 9], player: Player) -> Vec<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
            .collect()
    }
}
