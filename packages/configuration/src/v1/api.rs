use std::time::Duration;

use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the remote portal API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Constructor)]
pub struct Api {
    /// Base URL every resource endpoint is resolved against, including the
    /// `/api` path prefix. For example `http://127.0.0.1:5000/api`.
    #[serde(default = "Api::default_base_url")]
    pub base_url: Url,

    /// Maximum time in seconds to wait for a whole request. When it's not
    /// set the client waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Api {
    /// # Panics
    ///
    /// Will panic if the hardcoded default URL is not valid.
    fn default_base_url() -> Url {
        Url::parse("http://127.0.0.1:5000/api").expect("the default base URL should be valid")
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
