use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::domain::trading::types::Trade;

/// Loads a journal from a JSON file holding an array of trade records.
pub fn load_journal(path: &Path) -> Result<Vec<Trade>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file at {}", path.display()))?;
    let trades: Vec<Trade> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse journal file at {}", path.display()))?;
    info!(count = trades.len(), path = %path.display(), "loaded journal");
    Ok(trades)
}
