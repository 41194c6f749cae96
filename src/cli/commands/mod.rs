//! Command implementations

pub mod analyze;
pub mod bench;
pub mod play;
pub mod selfplay;

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

/// Write `value` as pretty-printed JSON to `path`
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, value)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
