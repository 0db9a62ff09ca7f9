//! Save/load of cross-run progress
//!
//! Only the high score table survives a run. The store is a port so the host
//! can back it with whatever it has (a JSON file natively, memory in tests).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::highscores::HighScores;

/// Current save format version
pub const SAVE_VERSION: u32 = 1;

/// Error type for save operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Save written by a newer build.
    #[error("unsupported save version {0}")]
    Version(u32),
}

/// Everything persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub high_score: u32,
    pub games_played: u32,
    #[serde(default)]
    pub leaderboard: HighScores,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            high_score: 0,
            games_played: 0,
            leaderboard: HighScores::new(),
        }
    }
}

impl SaveData {
    /// Fold a finished run in. Returns its leaderboard rank, if any.
    pub fn record_run(&mut self, score: u32) -> Option<usize> {
        self.games_played += 1;
        self.high_score = self.high_score.max(score);
        self.leaderboard.add_score(score, self.games_played)
    }
}

/// Storage port for `SaveData`
pub trait SaveStore {
    /// Load the save. `Ok(None)` when nothing was saved yet.
    fn load(&mut self) -> Result<Option<SaveData>, StoreError>;
    /// Persist the save, replacing the previous one.
    fn save(&mut self, data: &SaveData) -> Result<(), StoreError>;
}

/// Keeps the save in memory; lost on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub data: Option<SaveData>,
    pub saves: usize,
}

impl SaveStore for MemoryStore {
    fn load(&mut self) -> Result<Option<SaveData>, StoreError> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &SaveData) -> Result<(), StoreError> {
        self.data = Some(data.clone());
        self.saves += 1;
        Ok(())
    }
}

/// Save as a JSON file, written via a temp file then renamed into place
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SaveStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<SaveData>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err)),
        };
        let data: SaveData = serde_json::from_slice(&bytes)?;
        if data.version > SAVE_VERSION {
            return Err(StoreError::Version(data.version));
        }
        log::info!(
            "Loaded save: high score {}, {} games",
            data.high_score,
            data.games_played
        );
        Ok(Some(data))
    }

    fn save(&mut self, data: &SaveData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, serde_json::to_vec_pretty(data)?)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("Saved progress to {}", self.path.display());
        Ok(())
    }
}
