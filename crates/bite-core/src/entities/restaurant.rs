use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::City;

/// A catalogued eatery. `(name, city)` is unique across live rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub city: City,
    pub url: Option<String>,
}

impl Restaurant {
    /// Build a restaurant with a freshly generated id.
    ///
    /// The id is assigned client-side so the audit entry written alongside
    /// the insert references the same id the store persists.
    #[must_use]
    pub fn new(name: impl Into<String>, city: City, url: Option<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, city, url)
    }

    #[must_use]
    pub fn with_id(id: Uuid, name: impl Into<String>, city: City, url: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            city,
            url,
        }
    }
}
