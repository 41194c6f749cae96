//! Shared configuration for CLI commands

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::search::SearchConfig;

/// Flags accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// JSON file with search settings (`depth_penalty`, `pruning`)
    #[arg(long, global = true)]
    pub search_config: Option<PathBuf>,

    /// Fraction of a terminal reward lost per ply
    #[arg(long, global = true)]
    pub depth_penalty: Option<f64>,

    /// Disable alpha-beta cutoffs (plain minimax)
    #[arg(long, global = true)]
    pub no_pruning: bool,
}

impl CommonArgs {
    /// Build the search configuration: defaults, then the config file, then flags.
    pub fn resolve_search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.search_config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => SearchConfig::default(),
        };

        if let Some(penalty) = self.depth_penalty {
            config.depth_penalty = penalty;
        }
        if self.no_pruning {
            config.pruning = false;
        }

        config.validate()?;
        Ok(config)
    }
}
