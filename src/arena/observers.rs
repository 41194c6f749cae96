//! Observers for game series

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::GameObserver,
    tictactoe::{Game, Outcome, Player},
};

/// Progress bar observer - shows series progress with a running tally
pub struct ProgressObserver {
    progress_bar: ProgressBar,
    total_games: usize,
    x_wins: usize,
    draws: usize,
    o_wins: usize,
}

impl ProgressObserver {
    /// Create a progress bar for `total_games` games
    pub fn new(total_games: usize) -> Result<Self> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        Ok(Self::with_bar(pb, total_games))
    }

    /// Observer that tracks the tally without drawing anything
    pub fn hidden(total_games: usize) -> Self {
        Self::with_bar(ProgressBar::hidden(), total_games)
    }

    fn with_bar(progress_bar: ProgressBar, total_games: usize) -> Self {
        Self {
            progress_bar,
            total_games,
            x_wins: 0,
            draws: 0,
            o_wins: 0,
        }
    }

    fn tally(&self) -> String {
        format!("X:{} D:{} O:{}", self.x_wins, self.draws, self.o_wins)
    }
}

impl GameObserver for ProgressObserver {
    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        match game.outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undecided => {}
        }

        let done = game_num + 1;
        self.progress_bar.set_position(done as u64);
        if done >= self.total_games {
            self.progress_bar.finish_with_message(self.tally());
        } else {
            self.progress_bar.set_message(self.tally());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        agents::{MinimaxAgent, RandomAgent},
        arena::play_series,
    };

    #[test]
    fn test_tally_tracks_series() {
        let mut x = RandomAgent::with_seed("random", 11);
        let mut o = MinimaxAgent::new(Player::O);
        let mut observer = ProgressObserver::hidden(4);
        let summary = play_series(&mut x, &mut o, 4, &mut observer).unwrap();

        assert_eq!(observer.x_wins, summary.x_wins);
        assert_eq!(observer.o_wins, summary.o_wins);
        assert_eq!(observer.draws, summary.draws);
        assert_eq!(observer.x_wins, 0);
        assert!(observer.progress_bar.is_finished());
    }
}
