use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::scores::{default_entries, ScoreEntry, Scoreboard};
use crate::{MAX_ENTRIES, SCORE_FILE};

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("IO error on score file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed score file: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON-backed score table. Only a missing file falls back to the defaults.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Scoreboard, ScoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("no score file at {}, using defaults", self.path.display());
                return Ok(Scoreboard::new(default_entries()));
            }
            Err(err) => return Err(err.into()),
        };
        let entries: Vec<ScoreEntry> = serde_json::from_slice(&bytes)?;
        info!("loaded {} scores from {}", entries.len(), self.path.display());
        Ok(Scoreboard::new(entries))
    }

    pub fn save(&self, board: &Scoreboard) -> Result<(), ScoreError> {
        let top = &board.entries[..board.entries.len().min(MAX_ENTRIES)];
        fs::write(&self.path, serde_json::to_vec(top)?)?;
        info!("saved {} scores to {}", top.len(), self.path.display());
        Ok(())
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(SCORE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vim-snake-io-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir.join(SCORE_FILE)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let store = ScoreStore::new(scratch("missing"));
        let board = store.load().unwrap();
        assert_eq!(board.entries, default_entries());
        assert!(board.active.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch("malformed");
        fs::write(&path, b"{not json").unwrap();
        let err = ScoreStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ScoreError::Json(_)));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        // A directory cannot be read as a file.
        let path = scratch("dir");
        fs::create_dir_all(&path).unwrap();
        let err = ScoreStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ScoreError::Io(_)));
    }

    #[test]
    fn save_writes_plain_json_array() {
        let path = scratch("save");
        let store = ScoreStore::new(&path);
        let mut board = store.load().unwrap();
        board.insert_score(30);
        board.entries[0].name = "Neo".to_string();
        store.save(&board).unwrap();

        let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        let arr = raw.as_array().unwrap();
        assert_eq!(arr.len(), MAX_ENTRIES);
        assert_eq!(arr[0], serde_json::json!({"name": "Neo", "score": 30}));
        assert_eq!(store.load().unwrap().entries[0], ScoreEntry::new("Neo", 30));
    }

    #[test]
    fn negative_scores_load() {
        let path = scratch("negative");
        fs::write(&path, br#"[{"name":"A","score":9},{"name":"B","score":-1}]"#).unwrap();
        let mut board = ScoreStore::new(&path).load().unwrap();
        assert_eq!(board.entries[1], ScoreEntry::new("B", -1));
        assert_eq!(board.insert_score(0), Some(1));
    }

    #[test]
    fn load_sorts_unsorted_file() {
        let path = scratch("unsorted");
        fs::write(&path, br#"[{"name":"lo","score":1},{"name":"hi","score":9}]"#).unwrap();
        let board = ScoreStore::new(&path).load().unwrap();
        assert_eq!(board.entries[0].name, "hi");
    }
}
