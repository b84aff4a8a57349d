use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::AuditAction;

/// An append-only audit log entry recording one restaurant mutation.
///
/// `restaurant_id` is not a foreign key: entries outlive the restaurant
/// they describe.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub action: AuditAction,
    pub timestamp: DateTime<Utc>,
    pub actor_name: String,
    pub actor_id: u64,
    /// Machine-readable payload, see `audit_detail`.
    pub change_details: Option<serde_json::Value>,
    pub change_description: Option<String>,
}
