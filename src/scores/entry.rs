use log::info;
use serde::{Deserialize, Serialize};

use crate::MAX_ENTRIES;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

pub fn default_entries() -> Vec<ScoreEntry> {
    vec![
        ScoreEntry::new("Jebby", 20),
        ScoreEntry::new("Billy", 15),
        ScoreEntry::new("Timmy", 8),
        ScoreEntry::new("Todd", 5),
        ScoreEntry::new("Joey", 4),
    ]
}

/// Ranked table plus the row the player is currently naming, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub entries: Vec<ScoreEntry>,
    pub active: Option<usize>,
}

impl Scoreboard {
    /// Sorts descending by score; equal scores keep their file order.
    pub fn new(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Self {
            entries,
            active: None,
        }
    }

    /// Places `score` ahead of the first entry it ties or beats and makes it
    /// the active row. Positions past the persisted top rows count as no high
    /// score, so the active row is always saved.
    pub fn insert_score(&mut self, score: i64) -> Option<usize> {
        let slot = self
            .entries
            .iter()
            .position(|e| e.score <= score)
            .filter(|&idx| idx < MAX_ENTRIES);
        if let Some(idx) = slot {
            self.entries.insert(idx, ScoreEntry::new("", score));
            info!("score {} placed at rank {}", score, idx + 1);
        }
        self.entries.truncate(MAX_ENTRIES);
        self.active = slot;
        slot
    }

    pub fn active_entry(&self) -> Option<&ScoreEntry> {
        self.active.and_then(|idx| self.entries.get(idx))
    }

    pub(crate) fn active_entry_mut(&mut self) -> Option<&mut ScoreEntry> {
        self.active.and_then(move |idx| self.entries.get_mut(idx))
    }
}
