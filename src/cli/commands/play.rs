//! Play command - interactive human vs. computer game on the console

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::{
    agents::MinimaxAgent,
    cli::{config::CommonArgs, output::COORDINATE_GUIDE},
    ports::Agent,
    search::SearchConfig,
    tictactoe::{Game, GameState, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the minimax engine")]
pub struct PlayArgs {
    /// Side you play (`x` moves first, `o` second); asked interactively if omitted
    #[arg(long = "as")]
    pub side: Option<String>,

    /// Play a single game without asking to play again
    #[arg(long)]
    pub once: bool,
}

pub fn execute(args: PlayArgs, common: &CommonArgs) -> Result<()> {
    let config = common.resolve_search_config()?;
    let side = args.side.as_deref().map(Player::parse_token).transpose()?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_session(&mut console, side, args.once, config)?;
    Ok(())
}

/// Line-oriented console used for prompts and as the human player's agent
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Why a typed move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInputError {
    Unparsable,
    OutOfRange,
    Occupied,
}

impl MoveInputError {
    pub fn message(self) -> &'static str {
        match self {
            MoveInputError::Unparsable => {
                "Invalid input! Please enter row and column as numbers separated by a comma."
            }
            MoveInputError::OutOfRange => {
                "Invalid coordinates! Both row and column must be between 0 and 2."
            }
            MoveInputError::Occupied => "That position is already taken! Try again.",
        }
    }
}

/// Parse `row,col` and check it against the current board
pub fn parse_move(line: &str, state: &GameState) -> std::result::Result<Move, MoveInputError> {
    let (row, col) = line
        .trim()
        .split_once(',')
        .ok_or(MoveInputError::Unparsable)?;
    let row: usize = row.trim().parse().map_err(|_| MoveInputError::Unparsable)?;
    let col: usize = col.trim().parse().map_err(|_| MoveInputError::Unparsable)?;

    let mv = Move::new(row, col);
    if !mv.in_bounds() {
        return Err(MoveInputError::OutOfRange);
    }
    if !state.board().is_empty(mv) {
        return Err(MoveInputError::Occupied);
    }
    Ok(mv)
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt and read one line; `Ok(None)` at end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn require_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompt(prompt)?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    /// Ask which side the human plays
    pub fn choose_player(&mut self) -> io::Result<Player> {
        loop {
            let answer =
                self.require_line("Do you want to play as X (first) or O (second)? (x/o): ")?;
            match Player::parse_token(&answer) {
                Ok(player) => return Ok(player),
                Err(_) => writeln!(self.output, "Please enter 'x' or 'o'.")?,
            }
        }
    }

    /// Ask whether to start another game; end of input means no
    pub fn play_again(&mut self) -> io::Result<bool> {
        loop {
            let Some(answer) = self.prompt("\nDo you want to play again? (y/n): ")? else {
                return Ok(false);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please enter 'y' or 'n'.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for Console<R, W> {
    /// Keep asking until the typed move is legal for `state`.
    fn select_move(&mut self, state: &GameState) -> crate::Result<Move> {
        if state.is_terminal() {
            return Err(crate::Error::NoLegalMoves);
        }
        loop {
            let line = self
                .require_line("Enter your move as 'row,col' (e.g., 0,0 for top-left): ")
                .map_err(|source| crate::Error::Io {
                    operation: "read move".to_string(),
                    source,
                })?;
            match parse_move(&line, state) {
                Ok(mv) => return Ok(mv),
                Err(reason) => writeln!(self.output, "{}", reason.message())?,
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

/// Result line shown to the human at the end of a game
pub fn result_message(outcome: Outcome, human: Player) -> &'static str {
    match outcome {
        Outcome::Won(winner) if winner == human => "You win! Congratulations!",
        Outcome::Won(_) => "AI wins! Better luck next time.",
        _ => "It's a draw!",
    }
}

/// Play one human vs. engine game on the console
pub fn play_one<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    human: Player,
    config: SearchConfig,
) -> Result<Game> {
    let mut ai = MinimaxAgent::with_config(human.opponent(), config)?;
    let mut game = Game::new();
    let mut state = GameState::new();

    writeln!(console.output, "You are playing as {human}")?;
    writeln!(
        console.output,
        "Your opponent (AI) is playing as {}",
        human.opponent()
    )?;
    writeln!(
        console.output,
        "\nCoordinates are (row,col), starting from (0,0) at the top-left:"
    )?;
    writeln!(console.output, "{COORDINATE_GUIDE}")?;
    writeln!(console.output, "\nLet's begin!\n")?;
    write!(console.output, "{state}")?;

    while !state.is_terminal() {
        let mv = if state.current_player() == human {
            writeln!(console.output, "\nYour turn...")?;
            let mv = console.select_move(&state)?;
            writeln!(console.output, "\nYour move: {mv}")?;
            mv
        } else {
            writeln!(console.output, "\nAI is thinking...")?;
            let mv = ai.select_move(&state)?;
            writeln!(console.output, "\nAI move: {mv}")?;
            mv
        };

        game.play(mv)?;
        state = game.current_state()?;
        write!(console.output, "{state}")?;
    }

    debug!(human = %human, outcome = %game.outcome, "interactive game finished");
    writeln!(
        console.output,
        "\nGame Over! {}",
        result_message(game.outcome, human)
    )?;
    Ok(game)
}

/// Run games until the human declines another one
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    side: Option<Player>,
    once: bool,
    config: SearchConfig,
) -> Result<Vec<Game>> {
    writeln!(console.output, "{}", "=".repeat(50))?;
    writeln!(console.output, "Welcome to Tic Tac Toe vs. Minimax AI")?;
    writeln!(console.output, "{}", "=".repeat(50))?;

    let mut games = Vec::new();
    loop {
        let human = match side {
            Some(player) => player,
            None => console.choose_player()?,
        };
        games.push(play_one(console, human, config)?);

        if once || !console.play_again()? {
            break;
        }
    }

    writeln!(console.output, "\nThanks for playing! Goodbye!")?;
    Ok(games)
}
