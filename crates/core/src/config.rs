//! Persistent arena settings shared by the console and desktop front ends.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combatant::GladiatorTemplate;
use crate::content::{DEFAULT_PLAYER_ATTACK, DEFAULT_PLAYER_DEFENSE, DEFAULT_PLAYER_MAX_HEALTH};
use crate::policy::AiPolicy;

pub const APP_NAME: &str = "Arena";
pub const CONFIG_FORMAT_VERSION: u32 = 1;
/// Overrides the configured data directory when set.
pub const DATA_DIR_ENV: &str = "ARENA_DATA_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config {path}: {message}")]
    Invalid { path: String, message: String },
    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// Starting stats for the human fighter. The name comes from the front end.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_PLAYER_MAX_HEALTH,
            attack: DEFAULT_PLAYER_ATTACK,
            defense: DEFAULT_PLAYER_DEFENSE,
        }
    }
}

impl PlayerStats {
    pub fn template(self, name: impl Into<String>) -> GladiatorTemplate {
        GladiatorTemplate::new(name, self.max_health, self.attack, self.defense)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ArenaConfig {
    pub format_version: u32,
    /// Where the stores keep their files. `None` means the platform data dir.
    pub data_dir: Option<PathBuf>,
    pub ai_policy: AiPolicy,
    pub player: PlayerStats,
    pub turn_delay_ms: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            format_version: CONFIG_FORMAT_VERSION,
            data_dir: None,
            ai_policy: AiPolicy::Threshold,
            player: PlayerStats::default(),
            turn_delay_ms: 500,
        }
    }
}

impl ArenaConfig {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.config_dir().to_path_buf();
            path.push("arena.json");
            path
        })
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(error)) if error.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Invalid {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn write_atomic(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }

    /// Data directory: `ARENA_DATA_DIR`, then the configured one, then the
    /// platform data dir.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        let override_value = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        resolve_data_dir(override_value, self.data_dir.clone())
    }
}

fn resolve_data_dir(
    override_value: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = override_value.filter(|dir| !dir.as_os_str().is_empty()) {
        return Ok(dir);
    }
    if let Some(dir) = configured {
        return Ok(dir);
    }
    ProjectDirs::from("", "", APP_NAME)
        .map(|proj_dirs| proj_dirs.data_dir().to_path_buf())
        .ok_or(ConfigError::NoDataDir)
}
