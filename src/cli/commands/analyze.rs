//! Analyze command - score every legal move of a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::CommonArgs,
        output::{
            describe_outcome, format_number, print_section, print_stats_table, print_subsection,
        },
    },
    search::{Minimax, ScoredMove, SearchConfig, SearchReport},
    tictactoe::{GameState, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position with the minimax engine")]
pub struct AnalyzeArgs {
    /// Board as 9 cells of X, O or '.', row-major, optional `_X`/`_O` suffix
    pub board: String,

    /// Print the analysis as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Everything the engine knows about one position
#[derive(Debug, Clone, Serialize)]
pub struct PositionAnalysis {
    pub state: String,
    pub to_move: Player,
    pub outcome: Outcome,
    pub moves: Vec<ScoredMove>,
    pub best: Option<SearchReport>,
}

pub fn execute(args: AnalyzeArgs, common: &CommonArgs) -> Result<()> {
    let config = common.resolve_search_config()?;
    let state: GameState = args.board.parse()?;
    let analysis = analyze(&state, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&state, &analysis);
    }
    Ok(())
}

/// Score the position; a finished game gets no move list
pub fn analyze(state: &GameState, config: SearchConfig) -> Result<PositionAnalysis> {
    let engine = Minimax::new(config)?;
    let (moves, best) = if state.is_terminal() {
        (Vec::new(), None)
    } else {
        (engine.score_moves(state)?, Some(engine.search(state)?))
    };

    Ok(PositionAnalysis {
        state: state.encode(),
        to_move: state.current_player(),
        outcome: state.outcome(),
        moves,
        best,
    })
}

fn print_analysis(state: &GameState, analysis: &PositionAnalysis) {
    print_section("Position Analysis");
    print!("{state}");

    let Some(best) = &analysis.best else {
        println!("\n{}", describe_outcome(analysis.outcome));
        return;
    };

    print_subsection(&format!("Move values ({} to move)", analysis.to_move));
    for scored in &analysis.moves {
        let marker = if scored.mv == best.best_move {
            "  <- best"
        } else {
            ""
        };
        println!("  {}  {:+.2}{marker}", scored.mv, scored.score);
    }

    print_subsection("Search");
    print_stats_table(&[
        ("Best move", &best.best_move.to_string()),
        ("Score", &format!("{:+.2}", best.score)),
        ("Nodes", &format_number(best.stats.nodes)),
        ("Cutoffs", &format_number(best.stats.cutoffs)),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Move;

    #[test]
    fn test_analyze_open_position() {
        let state: GameState = "XX..O....".parse().unwrap();
        let analysis = analyze(&state, SearchConfig::default()).unwrap();

        assert_eq!(analysis.to_move, Player::O);
        assert_eq!(analysis.moves.len(), 6);
        let best = analysis.best.unwrap();
        assert_eq!(best.best_move, Move::new(0, 2));
        assert!(
            analysis
                .moves
                .iter()
                .any(|m| m.mv == best.best_move && m.score == best.score)
        );
    }

    #[test]
    fn test_analyze_finished_position() {
        let state: GameState = "XXXOO....".parse().unwrap();
        let analysis = analyze(&state, SearchConfig::default()).unwrap();

        assert!(analysis.moves.is_empty());
        assert!(analysis.best.is_none());
        assert_eq!(analysis.outcome, Outcome::Won(Player::X));
    }

    #[test]
    fn test_analysis_json_shape() {
        let state: GameState = "XX.OO.X..".parse().unwrap();
        let analysis = analyze(&state, SearchConfig::default()).unwrap();
        let value = serde_json::to_value(&analysis).unwrap();

        assert_eq!(value["state"], "XX.OO.X.._O");
        assert_eq!(value["best"]["best_move"]["row"], 1);
        assert_eq!(value["best"]["best_move"]["col"], 2);
        assert_eq!(value["moves"][0]["row"], 0);
    }
}
