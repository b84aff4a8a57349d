//! Store interfaces consumed by the services.
//!
//! Services hold `&dyn RestaurantStore` / `&dyn AuditStore`, so the same
//! service code runs over the shared autocommit connection or over an open
//! transaction (see [`crate::unit_of_work`]).

use async_trait::async_trait;
use uuid::Uuid;

use bite_core::entities::{AuditEntry, Restaurant};
use bite_core::enums::City;

use crate::error::DatabaseError;
use crate::page::Page;

/// Durable restaurant rows.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Insert the row, or overwrite name/city/url when the id exists.
    /// Returns the row as written.
    async fn upsert(&self, restaurant: &Restaurant) -> Result<Restaurant, DatabaseError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Restaurant, DatabaseError>;

    /// Exact (trimmed) name match within one city.
    async fn find_by_name_in_city(
        &self,
        name: &str,
        city: City,
    ) -> Result<Option<Restaurant>, DatabaseError>;

    /// Uniform pick among the city's rows; `None` when the city is empty.
    async fn get_random(&self, city: City) -> Result<Option<Restaurant>, DatabaseError>;

    /// Substring match within one city. A blank pattern is rejected.
    async fn search_by_name_in_city(
        &self,
        pattern: &str,
        city: City,
        page: Page,
    ) -> Result<Vec<Restaurant>, DatabaseError>;

    /// Substring match across all cities. A blank pattern matches everything.
    async fn search_by_name(
        &self,
        pattern: &str,
        page: Page,
    ) -> Result<Vec<Restaurant>, DatabaseError>;

    async fn list_by_city(&self, city: City, page: Page)
    -> Result<Vec<Restaurant>, DatabaseError>;

    async fn count(&self, city: Option<City>) -> Result<u64, DatabaseError>;

    async fn delete(&self, id: Uuid) -> Result<(), DatabaseError>;
}

/// Append-only audit log.
#[async_trait]
pub trait AuditStore: Send + Sync {
    async fn append(&self, entry: &AuditEntry) -> Result<(), DatabaseError>;

    /// Every entry for one restaurant id, newest first.
    async fn history(&self, restaurant_id: Uuid) -> Result<Vec<AuditEntry>, DatabaseError>;

    /// Entries across all restaurants, newest first.
    async fn page(&self, page: Page) -> Result<Vec<AuditEntry>, DatabaseError>;
}

/// SQL implementation of both stores over one libSQL connection.
///
/// The connection may be a plain autocommit connection or a transaction
/// (`libsql::Transaction` derefs to `Connection`).
#[derive(Clone, Copy)]
pub struct SqlStore<'c> {
    conn: &'c libsql::Connection,
}

impl<'c> SqlStore<'c> {
    #[must_use]
    pub const fn new(conn: &'c libsql::Connection) -> Self {
        Self { conn }
    }

    pub(crate) const fn conn(&self) -> &'c libsql::Connection {
        self.conn
    }
}
