use serde::{Deserialize, Serialize};

use super::Pagination;

/// `GET /api/study_sessions`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct StudySessions {
    pub study_sessions: Vec<StudySession>,
    pub pagination: Pagination,
}

/// A past or ongoing study session. Timestamps are ISO 8601 strings in UTC,
/// for example `2025-03-01T10:00:00Z`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct StudySession {
    pub id: u64,
    pub activity_name: String,
    pub group_name: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub number_of_review_items: u64,
}

impl StudySession {
    /// A session without an end time is still running.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}
