//! Local leaderboard persistence — the only state surviving a session.
//!
//! Stored as a JSON array of entries, capped at the top 10 by score.

use std::fs;
use std::path::Path;

use thiserror::Error;

use sentinel_core::constants::LEADERBOARD_CAP;
use sentinel_core::state::LeaderboardEntry;

/// Leaderboard persistence failures. Everything else in the engine rejects
/// silently; disk I/O is the one boundary that reports errors.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard io: {0}")]
    Io(#[from] std::io::Error),
    #[error("leaderboard format: {0}")]
    Format(#[from] serde_json::Error),
}

/// Top-scoring sessions, best first.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file. A missing file yields an empty leaderboard.
    pub fn load(path: &Path) -> Result<Self, LeaderboardError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let mut entries: Vec<LeaderboardEntry> = serde_json::from_str(&raw)?;
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(LEADERBOARD_CAP);
        Ok(Self { entries })
    }

    /// Persist to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), LeaderboardError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Insert an entry, keeping the list sorted by score and capped.
    pub fn record(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_CAP);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }
}
