use std::fmt;

use serde::Serialize;

/// One of the fixed collections the portal API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    StudyActivities,
    Words,
    Groups,
    StudySessions,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::StudyActivities,
        Resource::Words,
        Resource::Groups,
        Resource::StudySessions,
    ];

    /// Endpoint path relative to the API base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Resource::StudyActivities => "study_activities",
            Resource::Words => "words",
            Resource::Groups => "groups",
            Resource::StudySessions => "study_sessions",
        }
    }

    /// Human readable name used in failure messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Resource::StudyActivities => "study activities",
            Resource::Words => "words",
            Resource::Groups => "groups",
            Resource::StudySessions => "sessions",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
