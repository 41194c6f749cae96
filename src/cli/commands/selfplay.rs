//! Selfplay command - engine plays both sides and prints every move

use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    agents::MinimaxAgent,
    arena::play_from,
    cli::{commands::write_json, config::CommonArgs, output::BoardPrinter},
    search::SearchConfig,
    tictactoe::{Game, GameState, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Let the engine play against itself")]
pub struct SelfplayArgs {
    /// Starting position (9 cells of X, O, '.', optional `_X`/`_O` suffix)
    #[arg(long)]
    pub start: Option<String>,

    /// Write the finished game record as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SelfplayArgs, common: &CommonArgs) -> Result<()> {
    let config = common.resolve_search_config()?;
    let start = match &args.start {
        Some(text) => text.parse::<GameState>()?,
        None => GameState::new(),
    };

    let stdout = std::io::stdout();
    let game = run(start, config, stdout.lock())?;

    if let Some(path) = &args.export {
        write_json(path, &game)?;
        info!(path = %path.display(), "exported game record");
        println!("\nGame record written to {}", path.display());
    }
    Ok(())
}

/// Play one engine-vs-engine game from `start`, printing boards to `out`
pub fn run<W: Write>(start: GameState, config: SearchConfig, out: W) -> Result<Game> {
    let mut x = MinimaxAgent::with_config(Player::X, config)?;
    let mut o = MinimaxAgent::with_config(Player::O, config)?;
    let mut printer = BoardPrinter::new(out);
    let game = play_from(start, &mut x, &mut o, &mut printer, 0)?;
    Ok(game)
}
