//! Restaurant service: the store surface command handlers call.
//!
//! Every call is logged on start, success (with identifying fields), and
//! failure, then forwarded unchanged. Failures are re-raised as-is so
//! callers can branch on `NotFound` / `DuplicateKey` / `InvalidArgument`.

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use bite_core::entities::Restaurant;
use bite_core::enums::City;

use crate::error::DatabaseError;
use crate::page::Page;
use crate::store::RestaurantStore;

/// Log a failed store call. Caller mistakes are warnings, the rest errors.
pub(crate) fn log_failure(operation: &str, e: &DatabaseError) {
    if e.is_expected() {
        warn!(operation, error = %e, "restaurant operation rejected");
    } else {
        error!(operation, error = %e, "restaurant operation failed");
    }
}

pub struct RestaurantService<S> {
    store: S,
}

impl<S: RestaurantStore> RestaurantService<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// `DuplicateKey` when `(name, city)` is taken, `InvalidArgument` for a
    /// blank name, or a generic failure.
    pub async fn upsert(&self, restaurant: &Restaurant) -> Result<Restaurant, DatabaseError> {
        debug!(restaurant_id = %restaurant.id, name = %restaurant.name, city = %restaurant.city, "upserting restaurant");
        match self.store.upsert(restaurant).await {
            Ok(written) => {
                info!(restaurant_id = %written.id, name = %written.name, city = %written.city, "restaurant upserted");
                Ok(written)
            }
            Err(e) => {
                log_failure("upsert", &e);
                Err(e)
            }
        }
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Restaurant, DatabaseError> {
        debug!(restaurant_id = %id, "fetching restaurant");
        self.store.get_by_id(id).await.map_err(|e| {
            log_failure("get_by_id", &e);
            e
        })
    }

    /// # Errors
    ///
    /// Generic failures only; no match is `Ok(None)`.
    pub async fn find_by_name_in_city(
        &self,
        name: &str,
        city: City,
    ) -> Result<Option<Restaurant>, DatabaseError> {
        debug!(name, %city, "looking up restaurant by name");
        self.store.find_by_name_in_city(name, city).await.map_err(|e| {
            log_failure("find_by_name_in_city", &e);
            e
        })
    }

    /// # Errors
    ///
    /// Generic failures only; an empty city is `Ok(None)`.
    pub async fn get_random(&self, city: City) -> Result<Option<Restaurant>, DatabaseError> {
        debug!(%city, "picking random restaurant");
        match self.store.get_random(city).await {
            Ok(Some(r)) => {
                info!(restaurant_id = %r.id, name = %r.name, %city, "random restaurant picked");
                Ok(Some(r))
            }
            Ok(None) => {
                info!(%city, "no restaurants in city");
                Ok(None)
            }
            Err(e) => {
                log_failure("get_random", &e);
                Err(e)
            }
        }
    }

    /// # Errors
    ///
    /// `InvalidArgument` for a blank pattern or a bad page.
    pub async fn search_by_name_in_city(
        &self,
        pattern: &str,
        city: City,
        page_size: u32,
        page_number: u32,
    ) -> Result<Vec<Restaurant>, DatabaseError> {
        debug!(pattern, %city, page_size, page_number, "searching restaurants in city");
        let result = match Page::new(page_size, page_number) {
            Ok(page) => self.store.search_by_name_in_city(pattern, city, page).await,
            Err(e) => Err(e),
        };
        log_results("search_by_name_in_city", result)
    }

    /// # Errors
    ///
    /// `InvalidArgument` for a bad page.
    pub async fn search_by_name(
        &self,
        pattern: &str,
        page_size: u32,
        page_number: u32,
    ) -> Result<Vec<Restaurant>, DatabaseError> {
        debug!(pattern, page_size, page_number, "searching restaurants");
        let result = match Page::new(page_size, page_number) {
            Ok(page) => self.store.search_by_name(pattern, page).await,
            Err(e) => Err(e),
        };
        log_results("search_by_name", result)
    }

    /// # Errors
    ///
    /// `InvalidArgument` for a bad page.
    pub async fn list_by_city(
        &self,
        city: City,
        page_size: u32,
        page_number: u32,
    ) -> Result<Vec<Restaurant>, DatabaseError> {
        debug!(%city, page_size, page_number, "listing restaurants");
        let result = match Page::new(page_size, page_number) {
            Ok(page) => self.store.list_by_city(city, page).await,
            Err(e) => Err(e),
        };
        log_results("list_by_city", result)
    }

    /// # Errors
    ///
    /// Generic failures only.
    pub async fn count(&self, city: Option<City>) -> Result<u64, DatabaseError> {
        self.store.count(city).await.map_err(|e| {
            log_failure("count", &e);
            e
        })
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        debug!(restaurant_id = %id, "deleting restaurant");
        match self.store.delete(id).await {
            Ok(()) => {
                info!(restaurant_id = %id, "restaurant deleted");
                Ok(())
            }
            Err(e) => {
                log_failure("delete", &e);
                Err(e)
            }
        }
    }
}

fn log_results(
    operation: &str,
    result: Result<Vec<Restaurant>, DatabaseError>,
) -> Result<Vec<Restaurant>, DatabaseError> {
    match &result {
        Ok(found) => debug!(operation, count = found.len(), "query returned"),
        Err(e) => log_failure(operation, e),
    }
    result
}
