//! Cross-cutting error types for BiteBot.
//!
//! Store failures live in `bite_db::error::DatabaseError`; this module only
//! covers errors raised while decoding or checking domain values.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A stored integer code does not map to any enum variant.
    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: i64 },

    /// Data failed a domain check (blank name, malformed id, ...).
    #[error("Validation error: {0}")]
    Validation(String),
}
