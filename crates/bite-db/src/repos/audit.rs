//! Audit log repository.
//!
//! Append-only: there is no update or delete path. Reads are ordered newest
//! first, with insertion order breaking timestamp ties.

use async_trait::async_trait;
use uuid::Uuid;

use bite_core::entities::AuditEntry;
use bite_core::enums::AuditAction;

use crate::error::DatabaseError;
use crate::helpers::{
    actor_id_from_sql, actor_id_to_sql, format_datetime, get_opt_string, parse_datetime,
    parse_optional_json, parse_uuid,
};
use crate::page::Page;
use crate::store::{AuditStore, SqlStore};

const COLUMNS: &str = "id, restaurant_id, action, timestamp, actor_name, actor_id, \
                       change_details, change_description";
const NEWEST_FIRST: &str = "ORDER BY timestamp DESC, rowid DESC";

fn row_to_entry(row: &libsql::Row) -> Result<AuditEntry, DatabaseError> {
    Ok(AuditEntry {
        id: parse_uuid(&row.get::<String>(0)?)?,
        restaurant_id: parse_uuid(&row.get::<String>(1)?)?,
        action: AuditAction::from_code(row.get::<i64>(2)?)?,
        timestamp: parse_datetime(&row.get::<String>(3)?)?,
        actor_name: row.get::<String>(4)?,
        actor_id: actor_id_from_sql(row.get::<i64>(5)?),
        change_details: parse_optional_json(get_opt_string(row, 6)?.as_deref())?,
        change_description: get_opt_string(row, 7)?,
    })
}

async fn collect_entries(mut rows: libsql::Rows) -> Result<Vec<AuditEntry>, DatabaseError> {
    let mut entries = Vec::new();
    while let Some(row) = rows.next().await? {
        entries.push(row_to_entry(&row)?);
    }
    Ok(entries)
}

#[async_trait]
impl AuditStore for SqlStore<'_> {
    async fn append(&self, entry: &AuditEntry) -> Result<(), DatabaseError> {
        let details = entry
            .change_details
            .as_ref()
            .map(std::string::ToString::to_string);
        self.conn()
            .execute(
                "INSERT INTO audit_log (id, restaurant_id, action, timestamp, actor_name, actor_id,
                                        change_details, change_description)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    entry.id.to_string(),
                    entry.restaurant_id.to_string(),
                    entry.action.code(),
                    format_datetime(&entry.timestamp),
                    entry.actor_name.as_str(),
                    actor_id_to_sql(entry.actor_id),
                    details.as_deref(),
                    entry.change_description.as_deref()
                ],
            )
            .await
            .map_err(DatabaseError::from_write)?;
        Ok(())
    }

    async fn history(&self, restaurant_id: Uuid) -> Result<Vec<AuditEntry>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM audit_log WHERE restaurant_id = ?1 {NEWEST_FIRST}"
                ),
                [restaurant_id.to_string()],
            )
            .await?;
        collect_entries(rows).await
    }

    async fn page(&self, page: Page) -> Result<Vec<AuditEntry>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM audit_log {NEWEST_FIRST} LIMIT ?1 OFFSET ?2"),
                libsql::params![page.limit(), page.offset()],
            )
            .await?;
        collect_entries(rows).await
    }
}
