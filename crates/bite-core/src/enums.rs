//! Closed enumerations for BiteBot.
//!
//! Both enums persist as small integer codes (see `code()` / `from_code()`)
//! and render with their human label.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// City
// ---------------------------------------------------------------------------

/// A city the catalog covers.
///
/// Adding a city is a code change: the validation layer hardcodes the
/// textual codes users type for each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum City {
    Ramallah,
    Nablus,
}

impl City {
    pub const ALL: [Self; 2] = [Self::Ramallah, Self::Nablus];

    /// Integer code used in SQL storage.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Ramallah => 0,
            Self::Nablus => 1,
        }
    }

    /// Decode a stored integer code.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownCode` for codes outside the enumeration.
    pub const fn from_code(code: i64) -> Result<Self, CoreError> {
        match code {
            0 => Ok(Self::Ramallah),
            1 => Ok(Self::Nablus),
            _ => Err(CoreError::UnknownCode { kind: "city", code }),
        }
    }

    /// Human label, also used in audit descriptions and payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ramallah => "Ramallah",
            Self::Nablus => "Nablus",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Kind of mutation recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Create => 0,
            Self::Update => 1,
            Self::Delete => 2,
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::UnknownCode` for codes outside the enumeration.
    pub const fn from_code(code: i64) -> Result<Self, CoreError> {
        match code {
            0 => Ok(Self::Create),
            1 => Ok(Self::Update),
            2 => Ok(Self::Delete),
            _ => Err(CoreError::UnknownCode {
                kind: "audit action",
                code,
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
