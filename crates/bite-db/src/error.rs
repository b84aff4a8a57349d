//! Database error types for bite-db.

use thiserror::Error;

/// Errors from store and service operations.
///
/// `InvalidArgument`, `NotFound`, and `DuplicateKey` are the kinds command
/// handlers branch on; everything else is a generic failure.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Bad pagination, blank required search term, or an empty update.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup or delete by id matched no row.
    #[error("{entity} '{id}' was not found")]
    NotFound { entity: &'static str, id: String },

    /// The `(name, city)` unique constraint rejected a write.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A SQL query failed or returned unparseable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Invalid state encountered (e.g., unsupported database location).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Classify a libSQL error raised by a write, surfacing unique
    /// constraint violations as `DuplicateKey`.
    #[must_use]
    pub fn from_write(e: libsql::Error) -> Self {
        let msg = e.to_string();
        if msg.contains("UNIQUE constraint failed") {
            Self::DuplicateKey(msg)
        } else {
            Self::LibSql(e)
        }
    }

    /// Whether this error is the caller's fault rather than a system fault.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::NotFound { .. } | Self::DuplicateKey(_)
        )
    }
}

impl From<bite_core::errors::CoreError> for DatabaseError {
    fn from(e: bite_core::errors::CoreError) -> Self {
        Self::Query(e.to_string())
    }
}
