//! Text-generation (Ollama) endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.1".to_string()
}

/// Generation can be slow on local hardware.
const fn default_timeout_secs() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OllamaConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
