//! Typed audit detail payloads and the restaurant field diff.
//!
//! Create and Delete entries carry a full [`RestaurantSnapshot`]; Update
//! entries carry an [`UpdateDetail`] holding old/new pairs for the fields
//! that actually changed. The tracked fields are fixed: name, city, url.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Restaurant;
use crate::enums::City;
use crate::validation::normalize_url;

/// Full restaurant state, stored for Create and Delete.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RestaurantSnapshot {
    pub id: Uuid,
    pub name: String,
    pub city: City,
    pub url: Option<String>,
}

impl From<&Restaurant> for RestaurantSnapshot {
    fn from(r: &Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            city: r.city,
            url: r.url.clone(),
        }
    }
}

/// Old and new value of one field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldChange<T> {
    pub old: T,
    pub new: T,
}

/// Changed fields of an update. Unchanged fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldChange<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<FieldChange<City>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<FieldChange<Option<String>>>,
}

impl UpdateDetail {
    /// Compare two versions of a restaurant field by field.
    ///
    /// Blank and missing URLs are the same value. Returns `None` when
    /// nothing changed.
    #[must_use]
    pub fn between(old: &Restaurant, new: &Restaurant) -> Option<Self> {
        let mut detail = Self::default();

        if old.name != new.name {
            detail.name = Some(FieldChange {
                old: old.name.clone(),
                new: new.name.clone(),
            });
        }

        if old.city != new.city {
            detail.city = Some(FieldChange {
                old: old.city,
                new: new.city,
            });
        }

        let old_url = normalize_url(old.url.as_deref());
        let new_url = normalize_url(new.url.as_deref());
        if old_url != new_url {
            detail.url = Some(FieldChange {
                old: old_url,
                new: new_url,
            });
        }

        (!detail.is_empty()).then_some(detail)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none() && self.url.is_none()
    }

    #[must_use]
    pub fn change_count(&self) -> usize {
        usize::from(self.name.is_some())
            + usize::from(self.city.is_some())
            + usize::from(self.url.is_some())
    }

    /// One human-readable fragment per changed field, in name/city/url order.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::with_capacity(3);
        if let Some(name) = &self.name {
            parts.push(format!("Name: '{}' → '{}'", name.old, name.new));
        }
        if let Some(city) = &self.city {
            parts.push(format!("City: {} → {}", city.old, city.new));
        }
        if let Some(url) = &self.url {
            let old = url.old.as_deref().unwrap_or("(none)");
            let new = url.new.as_deref().unwrap_or("(removed)");
            parts.push(format!("URL: {old} → {new}"));
        }
        parts
    }
}

/// `Created restaurant '<name>' in <city>[ with URL: <url>]`
#[must_use]
pub fn create_description(restaurant: &Restaurant) -> String {
    let mut description = format!(
        "Created restaurant '{}' in {}",
        restaurant.name, restaurant.city
    );
    if let Some(url) = normalize_url(restaurant.url.as_deref()) {
        description.push_str(" with URL: ");
        description.push_str(&url);
    }
    description
}

/// `Deleted restaurant '<name>' from <city>`
#[must_use]
pub fn delete_description(restaurant: &Restaurant) -> String {
    format!(
        "Deleted restaurant '{}' from {}",
        restaurant.name, restaurant.city
    )
}

/// `Updated restaurant '<old name>': <change>, <change>`
#[must_use]
pub fn update_description(old_name: &str, detail: &UpdateDetail) -> String {
    format!(
        "Updated restaurant '{old_name}': {}",
        detail.describe().join(", ")
    )
}
