//! Shared test utilities for bite-db unit tests.

use std::time::Duration;

use tempfile::TempDir;

use crate::BiteDb;
use crate::catalog::Catalog;
use crate::store::SqlStore;

/// A migrated database in a temporary directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    db: BiteDb,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.db");
        let db = BiteDb::open_local(path.to_str().unwrap(), Duration::from_secs(5))
            .await
            .unwrap();
        Self { _dir: dir, db }
    }

    pub fn store(&self) -> SqlStore<'_> {
        SqlStore::new(self.db.conn())
    }

    pub const fn db(&self) -> &BiteDb {
        &self.db
    }
}

/// A catalog over a temporary database. Keep the `TempDir` alive for the
/// duration of the test.
pub async fn test_catalog() -> (TempDir, Catalog) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.db");
    let db = BiteDb::open_local(path.to_str().unwrap(), Duration::from_secs(5))
        .await
        .unwrap();
    (dir, Catalog::new(db))
}
