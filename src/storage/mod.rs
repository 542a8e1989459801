//! High-score persistence.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use bevy::log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::game::{HIGH_SCORE_FILE, HIGH_SCORE_PATH_ENV};

/// Where the best score survives between runs and launches.
pub trait ScoreStore: Send + Sync {
    /// Loads the stored score. Anything unreadable counts as 0.
    fn load(&self) -> u32;

    fn save(&self, high_score: u32) -> Result<()>;
}

#[derive(Serialize, Deserialize, Default)]
struct SaveData {
    high_score: u32,
}

/// JSON file store, `{"high_score": N}`.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Store at `$SNAKE_HIGHSCORE_PATH`, falling back to the working directory.
    pub fn from_env() -> Self {
        let path = std::env::var_os(HIGH_SCORE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(HIGH_SCORE_FILE));
        FileStore::new(path)
    }

    fn read(&self) -> Result<u32> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        parse_high_score(&text).with_context(|| format!("parsing {}", self.path.display()))
    }
}

/// Accepts the JSON save format and the bare integer of older plain-text files.
fn parse_high_score(text: &str) -> Result<u32> {
    if let Ok(data) = serde_json::from_str::<SaveData>(text) {
        return Ok(data.high_score);
    }
    let score = text.trim().parse::<u32>()?;
    Ok(score)
}

impl ScoreStore for FileStore {
    fn load(&self) -> u32 {
        if !self.path.exists() {
            debug!("no high score at {}, starting from 0", self.path.display());
            return 0;
        }
        match self.read() {
            Ok(score) => score,
            Err(err) => {
                warn!("ignoring unreadable high score: {err:#}");
                0
            }
        }
    }

    fn save(&self, high_score: u32) -> Result<()> {
        let text = serde_json::to_string_pretty(&SaveData { high_score })?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))
    }
}

/// In-memory store that records every save, for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saves: Arc<Mutex<Vec<u32>>>,
    initial: u32,
}

impl MemoryStore {
    pub fn with_score(initial: u32) -> Self {
        MemoryStore {
            initial,
            ..Default::default()
        }
    }

    /// Every value passed to `save`, oldest first.
    pub fn saves(&self) -> Vec<u32> {
        self.saves.lock().map(|saves| saves.clone()).unwrap_or_default()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.saves().last().copied().unwrap_or(self.initial)
    }

    fn save(&self, high_score: u32) -> Result<()> {
        let mut saves = self
            .saves
            .lock()
            .map_err(|_| anyhow::anyhow!("score log poisoned"))?;
        saves.push(high_score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_zero_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("scores.json"));
        assert_eq!(store.load(), 0);
        store.save(0).unwrap();
        assert_eq!(store.load(), 0);
        store.save(340).unwrap();
        assert_eq!(store.load(), 340);
    }

    #[test]
    fn corrupt_file_loads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(FileStore::new(&path).load(), 0);
        fs::write(&path, "-5").unwrap();
        assert_eq!(FileStore::new(&path).load(), 0);
    }

    #[test]
    fn plain_integer_files_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snake_highscore.txt");
        fs::write(&path, "120\n").unwrap();
        assert_eq!(FileStore::new(&path).load(), 120);
    }

    #[test]
    fn save_into_missing_directory_fails_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("missing").join("scores.json"));
        assert!(store.save(10).is_err());
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn memory_store_records_saves() {
        let store = MemoryStore::with_score(70);
        assert_eq!(store.load(), 70);
        store.save(90).unwrap();
        store.save(120).unwrap();
        assert_eq!(store.saves(), vec![90, 120]);
        assert_eq!(store.load(), 120);
    }
}
