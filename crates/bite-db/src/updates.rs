//! Partial restaurant update and its builder.

use serde::Serialize;

use bite_core::entities::Restaurant;
use bite_core::enums::City;

/// Fields to change on an existing restaurant. `url: Some(None)` removes
/// the URL; `url: None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestaurantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Option<String>>,
}

impl RestaurantUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none() && self.url.is_none()
    }

    /// The restaurant with this update applied. Id is never changed.
    #[must_use]
    pub fn apply_to(&self, restaurant: &Restaurant) -> Restaurant {
        Restaurant {
            id: restaurant.id,
            name: self.name.clone().unwrap_or_else(|| restaurant.name.clone()),
            city: self.city.unwrap_or(restaurant.city),
            url: self
                .url
                .clone()
                .unwrap_or_else(|| restaurant.url.clone()),
        }
    }
}

#[derive(Debug, Default)]
pub struct RestaurantUpdateBuilder(RestaurantUpdate);

impl RestaurantUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub const fn city(mut self, val: City) -> Self {
        self.0.city = Some(val);
        self
    }

    #[must_use]
    pub fn url(mut self, val: impl Into<String>) -> Self {
        self.0.url = Some(Some(val.into()));
        self
    }

    #[must_use]
    pub fn remove_url(mut self) -> Self {
        self.0.url = Some(None);
        self
    }

    #[must_use]
    pub fn build(self) -> RestaurantUpdate {
        self.0
    }
}
