//! Bench command - minimax engine against a random mover

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    agents::{MinimaxAgent, RandomAgent},
    arena::{ProgressObserver, SeriesSummary, play_series},
    cli::{
        commands::write_json,
        config::CommonArgs,
        output::{print_section, print_stats_table},
    },
    ports::GameObserver,
    search::SearchConfig,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against a random opponent")]
pub struct BenchArgs {
    /// Number of games to play
    #[arg(long, short = 'n', default_value_t = 100)]
    pub games: usize,

    /// Seed for the random opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side the engine plays (x or o)
    #[arg(long, default_value = "x")]
    pub engine_side: String,

    /// Write the series summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Series result from the engine's point of view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchReport {
    pub engine_side: Player,
    pub seed: Option<u64>,
    pub summary: SeriesSummary,
    pub engine_wins: usize,
    pub engine_losses: usize,
    pub draws: usize,
}

pub fn execute(args: BenchArgs, common: &CommonArgs) -> Result<()> {
    if args.games == 0 {
        bail!("--games must be at least 1");
    }
    let config = common.resolve_search_config()?;
    let engine_side = Player::parse_token(&args.engine_side)?;

    let report = if args.no_progress {
        run(&args, engine_side, config, &mut ProgressObserver::hidden(args.games))?
    } else {
        run(&args, engine_side, config, &mut ProgressObserver::new(args.games)?)?
    };

    print_report(&report);

    if let Some(path) = &args.export {
        write_json(path, &report)?;
        info!(path = %path.display(), "exported bench report");
        println!("\nReport written to {}", path.display());
    }
    Ok(())
}

/// Play the configured series and summarize it for the engine's side
pub fn run(
    args: &BenchArgs,
    engine_side: Player,
    config: SearchConfig,
    observer: &mut dyn GameObserver,
) -> Result<BenchReport> {
    let mut engine = MinimaxAgent::with_config(engine_side, config)?;
    let mut random = match args.seed {
        Some(seed) => RandomAgent::with_seed("random", seed),
        None => RandomAgent::new("random"),
    };

    let summary = match engine_side {
        Player::X => play_series(&mut engine, &mut random, args.games, observer)?,
        Player::O => play_series(&mut random, &mut engine, args.games, observer)?,
    };

    Ok(BenchReport {
        engine_side,
        seed: args.seed,
        summary,
        engine_wins: summary.wins_for(engine_side),
        engine_losses: summary.wins_for(engine_side.opponent()),
        draws: summary.draws,
    })
}

fn print_report(report: &BenchReport) {
    let summary = &report.summary;
    let engine = report.engine_side;
    let pct = |n: usize, rate: f64| format!("{n} ({:.1}%)", rate * 100.0);

    print_section(&format!("Minimax ({engine}) vs. random: {} games", summary.games));
    print_stats_table(&[
        ("Engine wins", &pct(report.engine_wins, summary.win_rate(engine))),
        ("Draws", &pct(report.draws, summary.draw_rate())),
        (
            "Engine losses",
            &pct(report.engine_losses, summary.win_rate(engine.opponent())),
        ),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(games: usize, seed: u64) -> BenchArgs {
        BenchArgs {
            games,
            seed: Some(seed),
            engine_side: "x".to_string(),
            export: None,
            no_progress: true,
        }
    }

    #[test]
    fn test_engine_never_loses_as_either_side() {
        for side in [Player::X, Player::O] {
            let args = args(20, 7);
            let mut observer = ProgressObserver::hidden(args.games);
            let report = run(&args, side, SearchConfig::default(), &mut observer).unwrap();

            assert_eq!(report.summary.games, 20);
            assert_eq!(report.engine_losses, 0);
            assert_eq!(report.engine_wins + report.draws, 20);
            assert_eq!(report.summary.win_rate(side.opponent()), 0.0);
            assert_eq!(
                report.summary.win_rate(side),
                report.engine_wins as f64 / 20.0
            );
        }
    }

    #[test]
    fn test_seeded_bench_is_reproducible() {
        let args = args(10, 42);
        let config = SearchConfig::default();
        let first = run(&args, Player::O, config, &mut ProgressObserver::hidden(10)).unwrap();
        let second = run(&args, Player::O, config, &mut ProgressObserver::hidden(10)).unwrap();
        assert_eq!(first, second);
    }
}
