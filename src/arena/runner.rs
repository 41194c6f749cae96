//! Game loop and series runner

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ports::{Agent, GameObserver},
    tictactoe::{Game, GameState, Outcome, Player},
};

/// Tally of outcomes over a series of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SeriesSummary {
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undecided => {}
        }
    }

    pub fn wins_for(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Fraction of games won by `player`, 0.0 for an empty series
    pub fn win_rate(&self, player: Player) -> f64 {
        self.fraction(self.wins_for(player))
    }

    pub fn draw_rate(&self) -> f64 {
        self.fraction(self.draws)
    }

    fn fraction(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64
        }
    }
}

/// Play one game from the empty board
pub fn play_game(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    observer: &mut dyn GameObserver,
    game_num: usize,
) -> Result<Game> {
    play_from(GameState::new(), x, o, observer, game_num)
}

/// Play one game from `start` until it is over.
///
/// Each agent's move is applied through [`Game::play`], so an illegal request
/// aborts the game with the corresponding error.
pub fn play_from(
    start: GameState,
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    observer: &mut dyn GameObserver,
    game_num: usize,
) -> Result<Game> {
    let mut game = Game::from_state(start);
    let mut state = start;
    debug!(game = game_num, x = x.name(), o = o.name(), "game start");
    observer.on_game_start(game_num, &state)?;

    let mut ply = 0;
    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let mv = agent.select_move(&state)?;
        debug!(game = game_num, ply, agent = agent.name(), %mv, "move");

        game.play(mv)?;
        state = game.current_state()?;
        observer.on_move(game_num, ply, mv, &state)?;
        ply += 1;
    }

    debug!(game = game_num, outcome = %game.outcome, "game end");
    observer.on_game_end(game_num, &game)?;
    Ok(game)
}

/// Play `games` games from the empty board, X always moving first
pub fn play_series(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    games: usize,
    observer: &mut dyn GameObserver,
) -> Result<SeriesSummary> {
    let mut summary = SeriesSummary::default();
    for game_num in 0..games {
        let game = play_game(x, o, observer, game_num)?;
        summary.record(game.outcome);
    }
    info!(
        x = x.name(),
        o = o.name(),
        games = summary.games,
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        draws = summary.draws,
        "series complete"
    );
    Ok(summary)
}
