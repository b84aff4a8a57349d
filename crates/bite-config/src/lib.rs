//! # bite-config
//!
//! Layered configuration loading for BiteBot using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BITEBOT_*` prefix, `__` as separator)
//! 2. Project-level `./bitebot.toml`
//! 3. User-level `~/.config/bitebot/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BITEBOT_DATABASE__PATH` -> `database.path`,
//! `BITEBOT_OLLAMA__MODEL` -> `ollama.model`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use bite_config::BiteConfig;
//!
//! let config = BiteConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod discord;
mod error;
mod general;
mod ollama;

pub use database::DatabaseConfig;
pub use discord::DiscordConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use ollama::OllamaConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "BITEBOT_";
const LOCAL_CONFIG_FILE: &str = "bitebot.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BiteConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl BiteConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory (if any).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make paginated commands meaningless.
    ///
    /// # Errors
    ///
    /// `ConfigError::ZeroLimit` naming the offending field, or
    /// `ConfigError::EmptyDatabasePath`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_page_size == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "general.default_page_size",
            });
        }
        if self.general.autocomplete_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "general.autocomplete_limit",
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bitebot").join("config.toml"))
    }
}
