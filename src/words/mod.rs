//! The static word-of-the-day dataset.
//! [WordList] is parsed once at startup and never mutated afterwards.

pub mod day_index;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// A single dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub definition: String,
    pub example: String,
}

const BUILTIN_WORDS: &str = include_str!("../../data/words.json");

/// An ordered, non-empty sequence of [WordEntry] values. Non-emptiness is
/// checked at construction so the day-index math never sees a zero length.
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    pub fn new(entries: Vec<WordEntry>) -> Result<Self> {
        ensure!(!entries.is_empty(), "Word list must contain at least one entry");
        Ok(Self { entries })
    }

    /// Parses the dataset embedded at build time.
    pub fn load_builtin() -> Result<Self> {
        let entries =
            serde_json::from_str(BUILTIN_WORDS).context("Failed to parse builtin word dataset")?;
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a day index produced by
    /// [compute_day_index](day_index::compute_day_index) with this list's
    /// length.
    pub fn get(&self, index: usize) -> &WordEntry {
        &self.entries[index]
    }
}
