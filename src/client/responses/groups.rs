use serde::{Deserialize, Serialize};

use super::Pagination;

/// `GET /api/groups`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Groups {
    pub groups: Vec<Group>,
    pub pagination: Pagination,
}

/// A thematic group of words.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub word_count: u64,
}
