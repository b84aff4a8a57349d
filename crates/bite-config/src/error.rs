//! Failures while loading [`crate::BiteConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `BITEBOT_*` variable did not deserialize.
    #[error("failed to read bitebot configuration: {0}")]
    Load(#[from] figment::Error),

    /// A page size or result cap of zero.
    #[error("'{field}' must be at least 1")]
    ZeroLimit { field: &'static str },

    #[error("'database.path' must not be empty")]
    EmptyDatabasePath,
}
