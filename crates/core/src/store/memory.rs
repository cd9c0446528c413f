//! In-memory store for tests and headless simulations.

use std::collections::BTreeMap;

use crate::combatant::GladiatorTemplate;
use crate::content::default_roster;
use crate::store::{ArenaStore, BattleRecord, Result, StoreError};

/// Not persistent across process restarts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    roster: Vec<GladiatorTemplate>,
    scores: BTreeMap<String, u32>,
    history: Vec<BattleRecord>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Vec<GladiatorTemplate>) -> Self {
        Self { roster, ..Self::default() }
    }

    /// A store whose writes always fail. Reads still succeed.
    pub fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    fn check_writable(&self, what: &str) -> Result<()> {
        if self.fail_writes {
            return Err(StoreError::Unavailable(format!("{what} rejected by failing store")));
        }
        Ok(())
    }
}

impl ArenaStore for MemoryStore {
    fn load_roster(&mut self) -> Result<Vec<GladiatorTemplate>> {
        if self.roster.is_empty() {
            return Ok(default_roster());
        }
        Ok(self.roster.clone())
    }

    fn save_roster(&mut self, roster: &[GladiatorTemplate]) -> Result<()> {
        self.check_writable("roster write")?;
        self.roster = roster.to_vec();
        Ok(())
    }

    fn record_battle(&mut self, record: &BattleRecord) -> Result<()> {
        self.check_writable("battle record")?;
        self.history.push(record.clone());
        Ok(())
    }

    fn battle_history(&self) -> Result<Vec<BattleRecord>> {
        Ok(self.history.clone())
    }

    fn clear_history(&mut self) -> Result<()> {
        self.check_writable("history clear")?;
        self.history.clear();
        Ok(())
    }

    fn set_score(&mut self, player: &str, score: u32) -> Result<()> {
        self.check_writable("score write")?;
        self.scores.insert(player.to_string(), score);
        Ok(())
    }

    fn scores(&self) -> Result<BTreeMap<String, u32>> {
        Ok(self.scores.clone())
    }

    fn clear_scores(&mut self) -> Result<()> {
        self.check_writable("score clear")?;
        self.scores.clear();
        Ok(())
    }
}
