//! Typed listings returned by the portal API.
//!
//! Every listing endpoint answers with the page of items under a key named
//! after the resource, plus the pagination metadata:
//!
//! ```json
//! {
//!   "words": [ { "id": 1, "french_word": "chat", ... } ],
//!   "pagination": { "total_items": 1, "total_pages": 1, "current_page": 1, ... }
//! }
//! ```
use serde::{Deserialize, Serialize};

pub mod groups;
pub mod study_activities;
pub mod study_sessions;
pub mod words;

pub use groups::Groups;
pub use study_activities::StudyActivities;
pub use study_sessions::StudySessions;
pub use words::Words;

/// Pagination metadata attached to every listing.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Pagination {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub items_per_page: u64,
    /// Absolute URL of the next page, if there is one.
    pub next_page: Option<String>,
    /// Absolute URL of the previous page, if there is one.
    pub prev_page: Option<String>,
}

impl Pagination {
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.next_page.is_none()
    }
}
