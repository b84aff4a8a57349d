//! Row-to-entity parsing and value encoding helpers.
//!
//! Both repos convert `libsql::Row` (column-indexed) into typed entities.
//! The encoding half keeps the storage conventions in one place: integer
//! enum codes, u64 actor ids as i64 bit patterns, and fixed-precision
//! RFC 3339 timestamps.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not RFC 3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Format a timestamp for storage. Fixed microsecond precision keeps
/// lexical order equal to chronological order.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a TEXT column holding a UUID.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the text is not a UUID.
pub fn parse_uuid(s: &str) -> Result<Uuid, DatabaseError> {
    Uuid::parse_str(s).map_err(|e| DatabaseError::Query(format!("Invalid id '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Extract an optional JSON value from a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string contains invalid JSON.
pub fn parse_optional_json(s: Option<&str>) -> Result<Option<serde_json::Value>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => {
            let val = serde_json::from_str(s)
                .map_err(|e| DatabaseError::Query(format!("Invalid JSON in column: {e}")))?;
            Ok(Some(val))
        }
        _ => Ok(None),
    }
}

/// Store a u64 platform id in an SQLite INTEGER (i64) column without
/// losing the top bit.
#[must_use]
pub const fn actor_id_to_sql(id: u64) -> i64 {
    i64::from_ne_bytes(id.to_ne_bytes())
}

/// Inverse of [`actor_id_to_sql`].
#[must_use]
pub const fn actor_id_from_sql(raw: i64) -> u64 {
    u64::from_ne_bytes(raw.to_ne_bytes())
}

/// Build a `LIKE` pattern matching `term` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped with `\`; queries
/// must use `ESCAPE '\'`.
#[must_use]
pub fn like_contains(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
