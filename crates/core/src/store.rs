//! Storage contract the battle core writes results through, plus the
//! in-memory and flat-file implementations.

use std::collections::BTreeMap;
use std::io;
use std::result;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combatant::GladiatorTemplate;
use crate::content::default_roster;
use crate::types::Verdict;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors surfaced by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error in {path}: {message}")]
    Json { path: String, message: String },

    #[error("corrupted battle record at line {line}: {message}")]
    CorruptedRecord { line: usize, message: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = result::Result<T, StoreError>;

/// Outcome of one finished battle, appended once and never rewritten.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub player: String,
    pub opponent: String,
    pub outcome: Verdict,
    pub timestamp_unix_ms: u64,
}

/// Persistence for rosters, scores and battle history.
///
/// Scores are non-negative win counters keyed by player name; a player
/// without an entry has a score of 0.
pub trait ArenaStore {
    /// Load opponent templates. A missing or empty source yields the
    /// default roster.
    fn load_roster(&mut self) -> Result<Vec<GladiatorTemplate>>;

    fn save_roster(&mut self, roster: &[GladiatorTemplate]) -> Result<()>;

    /// Replace the stored roster with the default one.
    fn reset_roster(&mut self) -> Result<Vec<GladiatorTemplate>> {
        let roster = default_roster();
        self.save_roster(&roster)?;
        Ok(roster)
    }

    /// Append one record to the battle history.
    fn record_battle(&mut self, record: &BattleRecord) -> Result<()>;

    /// Battle history, oldest first.
    fn battle_history(&self) -> Result<Vec<BattleRecord>>;

    fn clear_history(&mut self) -> Result<()>;

    fn score(&self, player: &str) -> Result<u32> {
        Ok(self.scores()?.get(player).copied().unwrap_or(0))
    }

    fn set_score(&mut self, player: &str, score: u32) -> Result<()>;

    fn scores(&self) -> Result<BTreeMap<String, u32>>;

    fn clear_scores(&mut self) -> Result<()>;
}
