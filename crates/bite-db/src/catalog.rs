//! The catalog surface consumed by command handlers.
//!
//! Reads and non-audited calls go through the shared autocommit
//! connection. Each audited mutation runs in its own [`UnitOfWork`], so a
//! restaurant write and its audit entry commit or roll back together.

use uuid::Uuid;

use bite_config::DatabaseConfig;
use bite_core::entities::{AuditEntry, Restaurant};
use bite_core::enums::City;
use bite_core::identity::Actor;
use bite_core::validation::normalize_url;

use crate::BiteDb;
use crate::audit_service::AuditService;
use crate::error::DatabaseError;
use crate::service::RestaurantService;
use crate::store::SqlStore;
use crate::unit_of_work::UnitOfWork;
use crate::updates::RestaurantUpdate;

/// Result of [`Catalog::update`]. `audit` is `None` when no tracked field
/// changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub restaurant: Restaurant,
    pub audit: Option<AuditEntry>,
}

/// Result of [`Catalog::upsert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created {
        restaurant: Restaurant,
        audit: AuditEntry,
    },
    Updated {
        restaurant: Restaurant,
        audit: Option<AuditEntry>,
    },
}

impl UpsertOutcome {
    #[must_use]
    pub const fn restaurant(&self) -> &Restaurant {
        match self {
            Self::Created { restaurant, .. } | Self::Updated { restaurant, .. } => restaurant,
        }
    }

    #[must_use]
    pub const fn was_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

pub struct Catalog {
    db: BiteDb,
}

impl Catalog {
    #[must_use]
    pub const fn new(db: BiteDb) -> Self {
        Self { db }
    }

    /// # Errors
    ///
    /// See [`BiteDb::open_with`].
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self::new(BiteDb::open_with(config).await?))
    }

    /// Restaurant reads and plain writes on the shared connection.
    #[must_use]
    pub fn restaurants(&self) -> RestaurantService<SqlStore<'_>> {
        RestaurantService::new(SqlStore::new(self.db.conn()))
    }

    /// Audit reads on the shared connection.
    #[must_use]
    pub fn audit(&self) -> AuditService<SqlStore<'_>> {
        AuditService::new(SqlStore::new(self.db.conn()))
    }

    /// Insert a new restaurant and its Create entry.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` if `(name, city)` is taken, `InvalidArgument` for a
    /// blank name. Nothing is written on failure.
    pub async fn add(
        &self,
        restaurant: &Restaurant,
        actor: &Actor,
    ) -> Result<(Restaurant, AuditEntry), DatabaseError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let result = create_in(&uow, restaurant, actor).await;
        uow.finish(result).await
    }

    /// Apply `changes` to an existing restaurant, logging the diff.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `changes` sets no field, `NotFound` for an
    /// unknown id, `DuplicateKey` if the new `(name, city)` is taken.
    pub async fn update(
        &self,
        id: Uuid,
        changes: &RestaurantUpdate,
        actor: &Actor,
    ) -> Result<UpdateOutcome, DatabaseError> {
        if changes.is_empty() {
            return Err(DatabaseError::InvalidArgument("no changes provided".into()));
        }
        let uow = UnitOfWork::begin(&self.db).await?;
        let result = update_in(&uow, id, changes, actor).await;
        uow.finish(result).await
    }

    /// Log then delete a restaurant. Returns the removed row.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id; the audit entry is rolled back with it.
    pub async fn delete(&self, id: Uuid, actor: &Actor) -> Result<Restaurant, DatabaseError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let result = delete_in(&uow, id, actor).await;
        uow.finish(result).await
    }

    /// Create-or-update keyed on `(name, city)`: an existing restaurant
    /// gets the new URL, otherwise a new one is created. Unlike the
    /// id-keyed [`crate::store::RestaurantStore::upsert`], an existing
    /// name never fails with `DuplicateKey`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank name.
    pub async fn upsert(
        &self,
        name: &str,
        city: City,
        url: Option<&str>,
        actor: &Actor,
    ) -> Result<UpsertOutcome, DatabaseError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let result = upsert_in(&uow, name, city, url, actor).await;
        uow.finish(result).await
    }
}

async fn create_in(
    uow: &UnitOfWork,
    restaurant: &Restaurant,
    actor: &Actor,
) -> Result<(Restaurant, AuditEntry), DatabaseError> {
    let created = uow.restaurants().upsert(restaurant).await?;
    let entry = uow.audit().log_create(&created, actor).await?;
    Ok((created, entry))
}

async fn update_in(
    uow: &UnitOfWork,
    id: Uuid,
    changes: &RestaurantUpdate,
    actor: &Actor,
) -> Result<UpdateOutcome, DatabaseError> {
    let restaurants = uow.restaurants();
    let old = restaurants.get_by_id(id).await?;
    let written = restaurants.upsert(&changes.apply_to(&old)).await?;
    let audit = uow.audit().log_update(id, &old, &written, actor).await?;
    Ok(UpdateOutcome {
        restaurant: written,
        audit,
    })
}

async fn delete_in(uow: &UnitOfWork, id: Uuid, actor: &Actor) -> Result<Restaurant, DatabaseError> {
    let restaurants = uow.restaurants();
    let existing = restaurants.get_by_id(id).await?;
    uow.audit().log_delete(&existing, actor).await?;
    restaurants.delete(id).await?;
    Ok(existing)
}

async fn upsert_in(
    uow: &UnitOfWork,
    name: &str,
    city: City,
    url: Option<&str>,
    actor: &Actor,
) -> Result<UpsertOutcome, DatabaseError> {
    let restaurants = uow.restaurants();
    let url = normalize_url(url);

    if let Some(old) = restaurants.find_by_name_in_city(name, city).await? {
        let mut new = old.clone();
        new.url = url;
        let written = restaurants.upsert(&new).await?;
        let audit = uow.audit().log_update(old.id, &old, &written, actor).await?;
        return Ok(UpsertOutcome::Updated {
            restaurant: written,
            audit,
        });
    }

    let (restaurant, audit) = create_in(uow, &Restaurant::new(name, city, url), actor).await?;
    Ok(UpsertOutcome::Created { restaurant, audit })
}
