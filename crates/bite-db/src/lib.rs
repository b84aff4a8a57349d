//! # bite-db
//!
//! libSQL persistence for BiteBot: the restaurant store, the append-only
//! audit log, and the services command handlers call.
//!
//! Layering, bottom-up:
//! - [`store`]: the `RestaurantStore` / `AuditStore` interfaces and their
//!   SQL implementation (`repos`)
//! - [`service`] / [`audit_service`]: logging wrapper and field-diff audit
//! - [`catalog`]: audited mutations, each inside one transaction

pub mod audit_service;
pub mod catalog;
pub mod error;
pub mod helpers;
mod migrations;
pub mod page;
pub mod repos;
pub mod service;
pub mod store;
pub mod unit_of_work;
pub mod updates;

#[cfg(test)]
mod test_support;

use std::time::Duration;

use bite_config::DatabaseConfig;
use error::DatabaseError;
use libsql::Builder;

pub use catalog::{Catalog, UpdateOutcome, UpsertOutcome};
pub use page::Page;

/// Handle to the BiteBot database file.
///
/// Owns one autocommit connection for reads and single-statement writes.
/// Transactions get their own connection via [`BiteDb::connect`].
pub struct BiteDb {
    db: libsql::Database,
    conn: libsql::Connection,
    busy_timeout: Duration,
}

impl BiteDb {
    /// Open (or create) a local database file and run migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for `:memory:` and
    /// `DatabaseError` if the file cannot be opened or migrations fail.
    pub async fn open_local(path: &str, busy_timeout: Duration) -> Result<Self, DatabaseError> {
        if path.trim().is_empty() || path.trim() == ":memory:" {
            return Err(DatabaseError::InvalidState(format!(
                "database path '{path}' is not a file; transactions need a shared file"
            )));
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        configure_connection(&conn, busy_timeout).await?;

        // WAL is persistent per file, so setting it once here is enough.
        conn.execute_batch("PRAGMA journal_mode = WAL;")
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA journal_mode: {e}")))?;

        let bite_db = Self {
            db,
            conn,
            busy_timeout,
        };
        bite_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(bite_db)
    }

    /// Open the database described by the `[database]` config section.
    ///
    /// # Errors
    ///
    /// See [`BiteDb::open_local`].
    pub async fn open_with(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Self::open_local(
            &config.path,
            Duration::from_millis(config.busy_timeout_ms),
        )
        .await
    }

    /// The shared autocommit connection.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Open a new connection to the same file, configured like the shared one.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be opened.
    pub async fn connect(&self) -> Result<libsql::Connection, DatabaseError> {
        let conn = self.db.connect()?;
        configure_connection(&conn, self.busy_timeout).await?;
        Ok(conn)
    }
}

/// Per-connection settings. `busy_timeout` makes concurrent writers wait
/// for the lock instead of failing with `SQLITE_BUSY`.
async fn configure_connection(
    conn: &libsql::Connection,
    busy_timeout: Duration,
) -> Result<(), DatabaseError> {
    conn.execute_batch(&format!(
        "PRAGMA busy_timeout = {};",
        busy_timeout.as_millis()
    ))
    .await
    .map_err(|e| DatabaseError::Migration(format!("PRAGMA busy_timeout: {e}")))?;
    Ok(())
}
