//! Chat platform credentials.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiscordConfig {
    /// Bot token.
    #[serde(default)]
    pub token: String,

    /// Guild for instant command registration. Commands register
    /// globally when unset. Read only by the chat gateway, which lives
    /// outside this workspace; the CLI never consults it.
    #[serde(default)]
    pub guild_id: Option<u64>,
}

impl DiscordConfig {
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }
}
