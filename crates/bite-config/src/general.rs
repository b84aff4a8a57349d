//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_page_size() -> u32 {
    10
}

/// Discord caps autocomplete choices at 25.
const fn default_autocomplete_limit() -> u32 {
    25
}

const fn default_autocomplete_min_chars() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page size for list/search/log commands.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Maximum suggestions returned by autocomplete.
    #[serde(default = "default_autocomplete_limit")]
    pub autocomplete_limit: u32,

    /// Autocomplete stays silent until the user typed this many characters.
    #[serde(default = "default_autocomplete_min_chars")]
    pub autocomplete_min_chars: usize,

    /// Actor name used by the CLI when none is given.
    #[serde(default)]
    pub actor_name: String,

    /// Actor id used by the CLI when none is given.
    #[serde(default)]
    pub actor_id: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            autocomplete_limit: default_autocomplete_limit(),
            autocomplete_min_chars: default_autocomplete_min_chars(),
            actor_name: String::new(),
            actor_id: 0,
        }
    }
}
