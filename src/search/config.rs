//! Search configuration

use serde::{Deserialize, Serialize};

use crate::tictactoe::board::CELLS;

/// Tunable parameters of the minimax search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fraction of a terminal reward lost per ply of depth
    pub depth_penalty: f64,

    /// Cut off sibling moves once `beta <= alpha`
    pub pruning: bool,
}

impl SearchConfig {
    pub const DEFAULT_DEPTH_PENALTY: f64 = 0.1;

    /// Reward attenuated by depth: `reward * (1 - depth * depth_penalty)`
    pub fn discount(&self, reward: f64, depth: usize) -> f64 {
        reward * (1.0 - depth as f64 * self.depth_penalty)
    }

    /// Reject penalties that could flip or zero a decisive reward.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the penalty is negative, not finite,
    /// or makes the attenuation factor non-positive at the deepest ply.
    pub fn validate(&self) -> crate::Result<()> {
        let penalty = self.depth_penalty;
        if !penalty.is_finite() || penalty < 0.0 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("depth penalty {penalty} must be finite and non-negative"),
            });
        }
        if penalty * CELLS as f64 >= 1.0 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "depth penalty {penalty} leaves no positive reward at depth {CELLS}"
                ),
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_penalty: Self::DEFAULT_DEPTH_PENALTY,
            pruning: true,
        }
    }
}
