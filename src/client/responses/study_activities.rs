use serde::{Deserialize, Serialize};

use super::Pagination;

/// `GET /api/study_activities`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct StudyActivities {
    pub study_activities: Vec<StudyActivity>,
    pub pagination: Pagination,
}

/// A learning app the portal can launch.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct StudyActivity {
    pub id: u64,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub launch_url: Option<String>,
}
