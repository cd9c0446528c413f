//! Flat-file store rooted at one data directory.
//!
//! - `gladiators.json`: roster, rewritten atomically.
//! - `scores.json`: player name to win count, rewritten atomically.
//! - `battles.jsonl`: append-only battle history, one record per line,
//!   flushed after every record so the file survives crashes.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::combatant::GladiatorTemplate;
use crate::store::{ArenaStore, BattleRecord, Result, StoreError};

pub const ROSTER_FILE: &str = "gladiators.json";
pub const SCORES_FILE: &str = "scores.json";
pub const HISTORY_FILE: &str = "battles.jsonl";

pub struct FileStore {
    dir: PathBuf,
    history: BufWriter<File>,
}

impl FileStore {
    /// Open (creating if needed) the store in `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        let history = open_history_writer(&dir.join(HISTORY_FILE))?;
        tracing::debug!("opened file store at {}", dir.display());
        Ok(Self { dir, history })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Flush pending writes and release the history file.
    pub fn close(mut self) -> Result<()> {
        self.history.flush()?;
        tracing::debug!("closed file store at {}", self.dir.display());
        Ok(())
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

fn open_history_writer(path: &Path) -> io::Result<BufWriter<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(BufWriter::new(file))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(error.into()),
    };
    if content.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| StoreError::Json { path: path.display().to_string(), message: e.to_string() })
}

fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Json {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl ArenaStore for FileStore {
    fn load_roster(&mut self) -> Result<Vec<GladiatorTemplate>> {
        let path = self.path(ROSTER_FILE);
        match read_json::<Vec<GladiatorTemplate>>(&path)? {
            Some(roster) if !roster.is_empty() => Ok(roster),
            _ => {
                tracing::info!("roster missing or empty at {}, writing defaults", path.display());
                self.reset_roster()
            }
        }
    }

    fn save_roster(&mut self, roster: &[GladiatorTemplate]) -> Result<()> {
        write_json_atomic(&self.path(ROSTER_FILE), roster)
    }

    fn record_battle(&mut self, record: &BattleRecord) -> Result<()> {
        let line = serde_json::to_string(record).map_err(|e| StoreError::Json {
            path: self.path(HISTORY_FILE).display().to_string(),
            message: e.to_string(),
        })?;
        writeln!(self.history, "{line}")?;
        self.history.flush()?;
        Ok(())
    }

    fn battle_history(&self) -> Result<Vec<BattleRecord>> {
        let content = match fs::read_to_string(self.path(HISTORY_FILE)) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };

        let mut records = Vec::new();
        for (line_index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(line).map_err(|e| StoreError::CorruptedRecord {
                line: line_index + 1,
                message: e.to_string(),
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn clear_history(&mut self) -> Result<()> {
        self.history.flush()?;
        let path = self.path(HISTORY_FILE);
        File::create(&path)?;
        self.history = open_history_writer(&path)?;
        Ok(())
    }

    fn set_score(&mut self, player: &str, score: u32) -> Result<()> {
        let mut scores = self.scores()?;
        scores.insert(player.to_string(), score);
        write_json_atomic(&self.path(SCORES_FILE), &scores)
    }

    fn scores(&self) -> Result<BTreeMap<String, u32>> {
        Ok(read_json(&self.path(SCORES_FILE))?.unwrap_or_default())
    }

    fn clear_scores(&mut self) -> Result<()> {
        write_json_atomic(&self.path(SCORES_FILE), &BTreeMap::<String, u32>::new())
    }
}
