//! Audit service: field-level diffs and immutable log entries.
//!
//! Create and Delete always write one entry carrying a full snapshot.
//! Update writes one entry only when name, city, or url actually changed.

use chrono::{SubsecRound, Utc};
use tracing::{error, info, warn};
use uuid::Uuid;

use bite_core::audit_detail::{
    RestaurantSnapshot, UpdateDetail, create_description, delete_description, update_description,
};
use bite_core::entities::{AuditEntry, Restaurant};
use bite_core::enums::AuditAction;
use bite_core::identity::Actor;

use crate::error::DatabaseError;
use crate::page::Page;
use crate::store::AuditStore;

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DatabaseError> {
    serde_json::to_value(value).map_err(|e| DatabaseError::Other(e.into()))
}

pub struct AuditService<S> {
    store: S,
}

impl<S: AuditStore> AuditService<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a creation with the full restaurant snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the entry cannot be written.
    pub async fn log_create(
        &self,
        restaurant: &Restaurant,
        actor: &Actor,
    ) -> Result<AuditEntry, DatabaseError> {
        let entry = new_entry(
            restaurant.id,
            AuditAction::Create,
            actor,
            to_json(&RestaurantSnapshot::from(restaurant))?,
            create_description(restaurant),
        );
        self.append(entry).await
    }

    /// Record a deletion. Call before the row is removed so the snapshot
    /// still reflects it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the entry cannot be written.
    pub async fn log_delete(
        &self,
        restaurant: &Restaurant,
        actor: &Actor,
    ) -> Result<AuditEntry, DatabaseError> {
        let entry = new_entry(
            restaurant.id,
            AuditAction::Delete,
            actor,
            to_json(&RestaurantSnapshot::from(restaurant))?,
            delete_description(restaurant),
        );
        self.append(entry).await
    }

    /// Record an update if any tracked field differs between `old` and `new`.
    ///
    /// Returns `Ok(None)` without writing when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the entry cannot be written.
    pub async fn log_update(
        &self,
        restaurant_id: Uuid,
        old: &Restaurant,
        new: &Restaurant,
        actor: &Actor,
    ) -> Result<Option<AuditEntry>, DatabaseError> {
        let Some(detail) = UpdateDetail::between(old, new) else {
            warn!(restaurant_id = %restaurant_id, actor = %actor.name, "update changed no tracked field; nothing logged");
            return Ok(None);
        };

        let entry = new_entry(
            restaurant_id,
            AuditAction::Update,
            actor,
            to_json(&detail)?,
            update_description(&old.name, &detail),
        );
        self.append(entry).await.map(Some)
    }

    /// Every entry for one restaurant, newest first. Works after deletion.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn history(&self, restaurant_id: Uuid) -> Result<Vec<AuditEntry>, DatabaseError> {
        self.store.history(restaurant_id).await.inspect_err(|e| {
            error!(restaurant_id = %restaurant_id, error = %e, "failed to read audit history");
        })
    }

    /// Entries across all restaurants, newest first.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a bad page, or a query failure.
    pub async fn all_logs(
        &self,
        page_size: u32,
        page_number: u32,
    ) -> Result<Vec<AuditEntry>, DatabaseError> {
        let page = Page::new(page_size, page_number).inspect_err(|e| {
            warn!(page_size, page_number, error = %e, "rejected audit log page");
        })?;
        self.store.page(page).await.inspect_err(|e| {
            error!(error = %e, "failed to read audit log");
        })
    }

    async fn append(&self, entry: AuditEntry) -> Result<AuditEntry, DatabaseError> {
        match self.store.append(&entry).await {
            Ok(()) => {
                info!(
                    audit_id = %entry.id,
                    restaurant_id = %entry.restaurant_id,
                    action = %entry.action,
                    actor = %entry.actor_name,
                    "audit entry written"
                );
                Ok(entry)
            }
            Err(e) => {
                error!(restaurant_id = %entry.restaurant_id, action = %entry.action, error = %e, "failed to write audit entry");
                Err(e)
            }
        }
    }
}

fn new_entry(
    restaurant_id: Uuid,
    action: AuditAction,
    actor: &Actor,
    details: serde_json::Value,
    description: String,
) -> AuditEntry {
    AuditEntry {
        id: Uuid::new_v4(),
        restaurant_id,
        action,
        // Storage keeps microseconds; truncate so the returned entry
        // equals what a later read produces.
        timestamp: Utc::now().trunc_subsecs(6),
        actor_name: actor.name.clone(),
        actor_id: actor.id,
        change_details: Some(details),
        change_description: Some(description),
    }
}
