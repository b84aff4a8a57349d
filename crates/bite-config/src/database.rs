//! libSQL database configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "bitebot.db".to_string()
}

const fn default_busy_timeout_ms() -> u64 {
    5_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path of the local database file.
    #[serde(default = "default_path")]
    pub path: String,

    /// How long a connection waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}
