//! Identity of the chat user performing a mutation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The acting user, captured at write time. Not normalized against any
/// users table: the display name is stored exactly as delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Actor {
    pub name: String,
    /// Platform user id (a 64-bit unsigned snowflake).
    pub id: u64,
}

impl Actor {
    #[must_use]
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}
