//! Output formatting for CLI

use std::io::Write;

use crate::{
    Result,
    ports::GameObserver,
    tictactoe::{Game, GameState, Move, Outcome, Player},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("{title}");
    println!("{}", "=".repeat(50));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Short description of a finished game's result
pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won(player) => format!("Winner: {player}"),
        Outcome::Draw => "Winner: Draw".to_string(),
        Outcome::Undecided => "Game in progress".to_string(),
    }
}

/// Coordinate guide shown before interactive play
pub const COORDINATE_GUIDE: &str = "\
(0,0) | (0,1) | (0,2)
---------------------
(1,0) | (1,1) | (1,2)
---------------------
(2,0) | (2,1) | (2,2)";

/// Observer that prints every move and the resulting board
pub struct BoardPrinter<W: Write> {
    out: W,
}

impl<W: Write> BoardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameObserver for BoardPrinter<W> {
    fn on_game_start(&mut self, _game_num: usize, state: &GameState) -> Result<()> {
        writeln!(self.out, "Initial board:")?;
        write!(self.out, "{state}")?;
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        ply: usize,
        mv: Move,
        after: &GameState,
    ) -> Result<()> {
        // The turn has already passed, so the mover is the opponent of the side to move.
        let mover: Player = after.current_player().opponent();
        writeln!(self.out, "\nMove {} ({mover}): {mv}", ply + 1)?;
        write!(self.out, "{after}")?;
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, game: &Game) -> Result<()> {
        writeln!(self.out, "\nGame Over! {}", describe_outcome(game.outcome))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{agents::MinimaxAgent, arena::play_from};

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(549946), "549,946");
    }

    #[test]
    fn test_describe_outcome() {
        assert_eq!(describe_outcome(Outcome::Won(Player::O)), "Winner: O");
        assert_eq!(describe_outcome(Outcome::Draw), "Winner: Draw");
    }

    #[test]
    fn test_board_printer_output() {
        let start: GameState = "XX.OO....".parse().unwrap();
        let mut x = MinimaxAgent::new(Player::X);
        let mut o = MinimaxAgent::new(Player::O);
        let mut printer = BoardPrinter::new(Vec::new());
        play_from(start, &mut x, &mut o, &mut printer, 0).unwrap();

        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert!(text.starts_with("Initial board:"));
        assert!(text.contains("Move 1 (X): (0, 2)"));
        assert!(text.contains("| X | X | X |"));
        assert!(text.ends_with("Game Over! Winner: X\n"));
    }
}
