//! One transaction spanning a restaurant write and its audit entry.
//!
//! Each unit of work owns a dedicated connection and starts with
//! `BEGIN IMMEDIATE`, so concurrent units serialize on the write lock
//! (bounded by the busy timeout) instead of failing mid-transaction.

use libsql::TransactionBehavior;
use tracing::warn;

use crate::BiteDb;
use crate::audit_service::AuditService;
use crate::error::DatabaseError;
use crate::service::RestaurantService;
use crate::store::SqlStore;

pub struct UnitOfWork {
    tx: libsql::Transaction,
}

impl UnitOfWork {
    /// # Errors
    ///
    /// Returns `DatabaseError` if no connection can be opened or the write
    /// lock is not acquired within the busy timeout.
    pub async fn begin(db: &BiteDb) -> Result<Self, DatabaseError> {
        let conn = db.connect().await?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await?;
        Ok(Self { tx })
    }

    #[must_use]
    pub fn store(&self) -> SqlStore<'_> {
        SqlStore::new(&self.tx)
    }

    #[must_use]
    pub fn restaurants(&self) -> RestaurantService<SqlStore<'_>> {
        RestaurantService::new(self.store())
    }

    #[must_use]
    pub fn audit(&self) -> AuditService<SqlStore<'_>> {
        AuditService::new(self.store())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if COMMIT fails; the transaction is then
    /// rolled back by SQLite.
    pub async fn commit(self) -> Result<(), DatabaseError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if ROLLBACK fails.
    pub async fn rollback(self) -> Result<(), DatabaseError> {
        self.tx.rollback().await?;
        Ok(())
    }

    /// Commit on `Ok`, roll back on `Err`, and pass the result through.
    ///
    /// # Errors
    ///
    /// The original error, or the commit failure.
    pub async fn finish<T>(self, result: Result<T, DatabaseError>) -> Result<T, DatabaseError> {
        match result {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback) = self.rollback().await {
                    warn!(error = %rollback, "rollback failed; connection drop discards the transaction");
                }
                Err(e)
            }
        }
    }
}
