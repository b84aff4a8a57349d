//! Schema migration runner.
//!
//! The SQL is embedded at compile time and every statement is guarded by
//! `IF NOT EXISTS`, so it runs on each open.

use crate::BiteDb;
use crate::error::DatabaseError;

/// Initial schema: `restaurants`, `audit_log`, and their indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl BiteDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
