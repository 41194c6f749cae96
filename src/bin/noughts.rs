//! noughts - optimal Tic-Tac-Toe from the command line
//!
//! Subcommands:
//! - play: human vs. engine on the console
//! - selfplay: engine vs. engine with every board printed
//! - analyze: score every legal move of a position
//! - bench: engine vs. a random mover over many games

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{
    commands::{analyze, bench, play, selfplay},
    config::CommonArgs,
    init_tracing,
};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Optimal Tic-Tac-Toe via alpha-beta minimax", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play(play::PlayArgs),

    /// Watch the engine play itself
    Selfplay(selfplay::SelfplayArgs),

    /// Analyze a board position
    Analyze(analyze::AnalyzeArgs),

    /// Benchmark the engine against a random opponent
    Bench(bench::BenchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.common.verbose);

    match cli.command {
        Commands::Play(args) => play::execute(args, &cli.common),
        Commands::Selfplay(args) => selfplay::execute(args, &cli.common),
        Commands::Analyze(args) => analyze::execute(args, &cli.common),
        Commands::Bench(args) => bench::execute(args, &cli.common),
    }
}
