//! Exhaustive minimax search with alpha-beta pruning
//!
//! X is always the maximizing side and O the minimizing side, whichever side
//! asked for a move. Terminal rewards are attenuated by depth so that faster
//! wins and slower losses are preferred. Successor states are explored by
//! value, so the caller's state is never touched.

use serde::Serialize;
use tracing::{debug, trace};

use super::config::SearchConfig;
use crate::{
    Error, Result,
    tictactoe::{GameState, Move, Player},
};

/// Counters collected during one search call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions evaluated below the root
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped
    pub cutoffs: u64,
}

/// Result of a root search
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchReport {
    pub player: Player,
    pub best_move: Move,
    pub score: f64,
    pub stats: SearchStats,
}

/// A legal move and its exact minimax value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMove {
    #[serde(flatten)]
    pub mv: Move,
    pub score: f64,
}

/// Alpha-beta minimax engine
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    /// Create an engine with a validated configuration
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Optimal move for the side to move
    pub fn best_move(&self, state: &GameState) -> Result<Move> {
        self.search(state).map(|report| report.best_move)
    }

    /// Search every legal move of `state` for the side to move.
    ///
    /// Candidates are tried in row-major order and only a strictly better
    /// score replaces the current best, so ties go to the earliest move. The
    /// root bound (alpha for X, beta for O) tracks the best score so far and
    /// is passed down to later candidates.
    ///
    /// # Errors
    ///
    /// Returns `NoLegalMoves` if the game is already over or the board is full.
    pub fn search(&self, state: &GameState) -> Result<SearchReport> {
        let moves = Self::root_moves(state)?;
        let player = state.current_player();
        let maximizing = player.is_maximizing();

        let mut stats = SearchStats::default();
        let mut best_move = None;
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut alpha = f64::NEG_INFINITY;
        let mut beta = f64::INFINITY;

        for mv in moves {
            let child = state.with_move(mv)?;
            let score = self.minimax(&child, 0, alpha, beta, &mut stats)?;
            trace!(%mv, score, "root candidate");

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                if self.config.pruning {
                    alpha = alpha.max(best_score);
                }
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                if self.config.pruning {
                    beta = beta.min(best_score);
                }
            }
        }

        let best_move = best_move.ok_or(Error::NoLegalMoves)?;
        debug!(
            player = %player,
            best = %best_move,
            score = best_score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "search complete"
        );

        Ok(SearchReport {
            player,
            best_move,
            score: best_score,
            stats,
        })
    }

    /// Exact value of every legal move, in row-major order.
    ///
    /// Each move is searched with a full window, so unlike the bounds seen
    /// inside [`search`](Self::search) every score here is exact.
    pub fn score_moves(&self, state: &GameState) -> Result<Vec<ScoredMove>> {
        let mut stats = SearchStats::default();
        Self::root_moves(state)?
            .into_iter()
            .map(|mv| {
                let child = state.with_move(mv)?;
                let score =
                    self.minimax(&child, 0, f64::NEG_INFINITY, f64::INFINITY, &mut stats)?;
                Ok(ScoredMove { mv, score })
            })
            .collect()
    }

    fn root_moves(state: &GameState) -> Result<Vec<Move>> {
        if state.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        let moves = state.valid_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }
        Ok(moves)
    }

    fn minimax(
        &self,
        state: &GameState,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        stats: &mut SearchStats,
    ) -> Result<f64> {
        stats.nodes += 1;

        if let Some(reward) = state.winner_reward() {
            return Ok(self.config.discount(reward, depth));
        }

        let maximizing = state.current_player().is_maximizing();
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in state.valid_moves() {
            let child = state.with_move(mv)?;
            let eval = self.minimax(&child, depth + 1, alpha, beta, stats)?;

            if maximizing {
                best = best.max(eval);
                alpha = alpha.max(eval);
            } else {
                best = best.min(eval);
                beta = beta.min(eval);
            }

            if self.config.pruning && beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }
}
