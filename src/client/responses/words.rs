use serde::{Deserialize, Serialize};

use super::Pagination;

/// `GET /api/words`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Words {
    pub words: Vec<Word>,
    pub pagination: Pagination,
}

/// A vocabulary entry with its review counters.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Word {
    pub id: u64,
    pub french_word: String,
    pub quebec_pronunciation: Option<String>,
    pub english: String,
    pub correct_count: u64,
    pub wrong_count: u64,
}

impl Word {
    /// Total reviews. It saturates at `u64::MAX`.
    #[must_use]
    pub fn review_count(&self) -> u64 {
        self.correct_count.saturating_add(self.wrong_count)
    }
}
