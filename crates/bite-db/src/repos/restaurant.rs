//! Restaurant repository: upsert, lookups, random pick, paginated search.

use async_trait::async_trait;
use rand::Rng;
use uuid::Uuid;

use bite_core::entities::Restaurant;
use bite_core::enums::City;
use bite_core::validation::{normalize_name, normalize_url};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, like_contains, parse_uuid};
use crate::page::Page;
use crate::store::{RestaurantStore, SqlStore};

const COLUMNS: &str = "id, name, city, url";
const ORDER: &str = "ORDER BY name ASC, id ASC";

fn row_to_restaurant(row: &libsql::Row) -> Result<Restaurant, DatabaseError> {
    Ok(Restaurant {
        id: parse_uuid(&row.get::<String>(0)?)?,
        name: row.get::<String>(1)?,
        city: City::from_code(row.get::<i64>(2)?)?,
        url: get_opt_string(row, 3)?,
    })
}

fn not_found(id: Uuid) -> DatabaseError {
    DatabaseError::NotFound {
        entity: "restaurant",
        id: id.to_string(),
    }
}

impl SqlStore<'_> {
    async fn query_restaurants(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<Restaurant>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(sql, libsql::params_from_iter(params))
            .await?;
        let mut restaurants = Vec::new();
        while let Some(row) = rows.next().await? {
            restaurants.push(row_to_restaurant(&row)?);
        }
        Ok(restaurants)
    }
}

#[async_trait]
impl RestaurantStore for SqlStore<'_> {
    async fn upsert(&self, restaurant: &Restaurant) -> Result<Restaurant, DatabaseError> {
        let name = normalize_name(&restaurant.name).ok_or_else(|| {
            DatabaseError::InvalidArgument("restaurant name must not be blank".into())
        })?;
        let written = Restaurant {
            id: restaurant.id,
            name,
            city: restaurant.city,
            url: normalize_url(restaurant.url.as_deref()),
        };

        // One statement, so the id lookup and the write cannot interleave
        // with another writer.
        self.conn()
            .execute(
                "INSERT INTO restaurants (id, name, city, url) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     name = excluded.name,
                     city = excluded.city,
                     url = excluded.url",
                libsql::params![
                    written.id.to_string(),
                    written.name.as_str(),
                    written.city.code(),
                    written.url.as_deref()
                ],
            )
            .await
            .map_err(DatabaseError::from_write)?;

        Ok(written)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Restaurant, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM restaurants WHERE id = ?1"),
                [id.to_string()],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| not_found(id))?;
        row_to_restaurant(&row)
    }

    async fn find_by_name_in_city(
        &self,
        name: &str,
        city: City,
    ) -> Result<Option<Restaurant>, DatabaseError> {
        let Some(name) = normalize_name(name) else {
            return Ok(None);
        };
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM restaurants WHERE name = ?1 AND city = ?2"),
                libsql::params![name, city.code()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_restaurant(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_random(&self, city: City) -> Result<Option<Restaurant>, DatabaseError> {
        let count = self.count(Some(city)).await?;
        if count == 0 {
            return Ok(None);
        }

        let skip = rand::thread_rng().gen_range(0..count);
        let skip = i64::try_from(skip)
            .map_err(|e| DatabaseError::Query(format!("random offset out of range: {e}")))?;

        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM restaurants WHERE city = ?1 {ORDER} LIMIT 1 OFFSET ?2"
                ),
                libsql::params![city.code(), skip],
            )
            .await?;
        // A concurrent delete can shrink the city between count and select.
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_restaurant(&row)?)),
            None => Ok(None),
        }
    }

    async fn search_by_name_in_city(
        &self,
        pattern: &str,
        city: City,
        page: Page,
    ) -> Result<Vec<Restaurant>, DatabaseError> {
        // Blank is rejected, but surrounding spaces still take part in the match.
        if pattern.trim().is_empty() {
            return Err(DatabaseError::InvalidArgument(
                "search pattern must not be blank".into(),
            ));
        }
        self.query_restaurants(
            &format!(
                "SELECT {COLUMNS} FROM restaurants
                 WHERE city = ?1 AND name LIKE ?2 ESCAPE '\\'
                 {ORDER} LIMIT ?3 OFFSET ?4"
            ),
            vec![
                city.code().into(),
                like_contains(pattern).into(),
                page.limit().into(),
                page.offset().into(),
            ],
        )
        .await
    }

    async fn search_by_name(
        &self,
        pattern: &str,
        page: Page,
    ) -> Result<Vec<Restaurant>, DatabaseError> {
        let like = if pattern.trim().is_empty() {
            "%".to_string()
        } else {
            like_contains(pattern)
        };
        self.query_restaurants(
            &format!(
                "SELECT {COLUMNS} FROM restaurants
                 WHERE name LIKE ?1 ESCAPE '\\'
                 {ORDER} LIMIT ?2 OFFSET ?3"
            ),
            vec![like.into(), page.limit().into(), page.offset().into()],
        )
        .await
    }

    async fn list_by_city(
        &self,
        city: City,
        page: Page,
    ) -> Result<Vec<Restaurant>, DatabaseError> {
        self.query_restaurants(
            &format!(
                "SELECT {COLUMNS} FROM restaurants WHERE city = ?1 {ORDER} LIMIT ?2 OFFSET ?3"
            ),
            vec![
                city.code().into(),
                page.limit().into(),
                page.offset().into(),
            ],
        )
        .await
    }

    async fn count(&self, city: Option<City>) -> Result<u64, DatabaseError> {
        let mut rows = match city {
            Some(city) => {
                self.conn()
                    .query(
                        "SELECT COUNT(*) FROM restaurants WHERE city = ?1",
                        [city.code()],
                    )
                    .await?
            }
            None => {
                self.conn()
                    .query("SELECT COUNT(*) FROM restaurants", ())
                    .await?
            }
        };
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::Query("COUNT returned no row".into()))?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::Query(format!("negative count: {e}")))
    }

    async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let affected = self
            .conn()
            .execute("DELETE FROM restaurants WHERE id = ?1", [id.to_string()])
            .await?;
        if affected == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDb;
    use pretty_assertions::assert_eq;

    fn page(size: u32, number: u32) -> Page {
        Page::new(size, number).unwrap()
    }

    async fn seed(store: &SqlStore<'_>, name: &str, city: City) -> Restaurant {
        store
            .upsert(&Restaurant::new(name, city, None))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn upsert_inserts_with_caller_id() {
        let db = TestDb::new().await;
        let store = db.store();

        let r = Restaurant::new("Joe's", City::Ramallah, Some("https://joes.example".into()));
        let written = store.upsert(&r).await.unwrap();
        assert_eq!(written, r);

        let fetched = store.get_by_id(r.id).await.unwrap();
        assert_eq!(fetched, r);
    }

    #[tokio::test]
    async fn upsert_same_id_updates_in_place() {
        let db = TestDb::new().await;
        let store = db.store();

        let mut r = seed(&store, "Joe's", City::Ramallah).await;
        r.name = "Joe's Grill".into();
        r.city = City::Nablus;
        store.upsert(&r).await.unwrap();

        assert_eq!(store.count(None).await.unwrap(), 1);
        let fetched = store.get_by_id(r.id).await.unwrap();
        assert_eq!(fetched.name, "Joe's Grill");
        assert_eq!(fetched.city, City::Nablus);
    }

    #[tokio::test]
    async fn upsert_trims_name_and_blank_url() {
        let db = TestDb::new().await;
        let store = db.store();

        let r = Restaurant::new("  Falafel Abu Ali  ", City::Nablus, Some("   ".into()));
        let written = store.upsert(&r).await.unwrap();
        assert_eq!(written.name, "Falafel Abu Ali");
        assert_eq!(written.url, None);

        let fetched = store.get_by_id(r.id).await.unwrap();
        assert_eq!(fetched, written);
    }

    #[tokio::test]
    async fn upsert_blank_name_is_invalid() {
        let db = TestDb::new().await;
        let err = db
            .store()
            .upsert(&Restaurant::new("   ", City::Ramallah, None))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn duplicate_name_in_city_is_rejected() {
        let db = TestDb::new().await;
        let store = db.store();

        seed(&store, "Joe's", City::Ramallah).await;
        let err = store
            .upsert(&Restaurant::new("Joe's", City::Ramallah, None))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::DuplicateKey(_)), "{err}");

        // Same name, other city is fine.
        seed(&store, "Joe's", City::Nablus).await;
        assert_eq!(store.count(None).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn renaming_onto_existing_name_is_duplicate() {
        let db = TestDb::new().await;
        let store = db.store();

        seed(&store, "Alpha", City::Ramallah).await;
        let mut beta = seed(&store, "Beta", City::Ramallah).await;
        beta.name = "Alpha".into();
        let err = store.upsert(&beta).await.unwrap_err();
        assert!(matches!(err, DatabaseError::DuplicateKey(_)));
    }

    #[tokio::test]
    async fn uniqueness_is_case_sensitive() {
        let db = TestDb::new().await;
        let store = db.store();

        seed(&store, "joe's", City::Ramallah).await;
        seed(&store, "Joe's", City::Ramallah).await;
        assert_eq!(store.count(Some(City::Ramallah)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let db = TestDb::new().await;
        let err = db.store().get_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found_and_changes_nothing() {
        let db = TestDb::new().await;
        let store = db.store();
        seed(&store, "Joe's", City::Ramallah).await;

        let err = store.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
        assert_eq!(store.count(None).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let db = TestDb::new().await;
        let store = db.store();
        let r = seed(&store, "Joe's", City::Ramallah).await;

        store.delete(r.id).await.unwrap();
        assert!(matches!(
            store.get_by_id(r.id).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn find_by_name_in_city_matches_exactly() {
        let db = TestDb::new().await;
        let store = db.store();
        let r = seed(&store, "Joe's", City::Ramallah).await;

        let found = store
            .find_by_name_in_city(" Joe's ", City::Ramallah)
            .await
            .unwrap();
        assert_eq!(found, Some(r));
        assert_eq!(
            store
                .find_by_name_in_city("Joe's", City::Nablus)
                .await
                .unwrap(),
            None
        );
        assert_eq!(
            store
                .find_by_name_in_city("Joe", City::Ramallah)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn random_on_empty_city_is_none() {
        let db = TestDb::new().await;
        let store = db.store();
        seed(&store, "Joe's", City::Ramallah).await;

        assert_eq!(store.get_random(City::Nablus).await.unwrap(), None);
    }

    #[tokio::test]
    async fn random_only_returns_rows_from_city() {
        let db = TestDb::new().await;
        let store = db.store();
        let mut ramallah = Vec::new();
        for name in ["A", "B", "C"] {
            ramallah.push(seed(&store, name, City::Ramallah).await.id);
        }
        seed(&store, "D", City::Nablus).await;

        for _ in 0..30 {
            let pick = store.get_random(City::Ramallah).await.unwrap().unwrap();
            assert_eq!(pick.city, City::Ramallah);
            assert!(ramallah.contains(&pick.id));
        }
    }

    #[tokio::test]
    async fn list_by_city_is_ordered_and_paginated() {
        let db = TestDb::new().await;
        let store = db.store();
        for name in ["Charlie", "alpha", "Bravo", "Delta"] {
            seed(&store, name, City::Nablus).await;
        }
        seed(&store, "Zulu", City::Ramallah).await;

        let first = store.list_by_city(City::Nablus, page(2, 1)).await.unwrap();
        let second = store.list_by_city(City::Nablus, page(2, 2)).await.unwrap();
        let third = store.list_by_city(City::Nablus, page(2, 3)).await.unwrap();

        let names = |rs: &[Restaurant]| rs.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
        // BINARY collation: uppercase sorts before lowercase.
        assert_eq!(names(&first), vec!["Bravo", "Charlie"]);
        assert_eq!(names(&second), vec!["Delta", "alpha"]);
        assert!(third.is_empty());
    }

    #[tokio::test]
    async fn search_in_city_matches_substring() {
        let db = TestDb::new().await;
        let store = db.store();
        seed(&store, "Pizza House", City::Ramallah).await;
        seed(&store, "pizzeria", City::Ramallah).await;
        seed(&store, "Pizza Nablus", City::Nablus).await;
        seed(&store, "Shawarma", City::Ramallah).await;

        let found = store
            .search_by_name_in_city("pizz", City::Ramallah, page(10, 1))
            .await
            .unwrap();
        let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza House", "pizzeria"]);
    }

    #[tokio::test]
    async fn search_keeps_surrounding_spaces() {
        let db = TestDb::new().await;
        let store = db.store();
        seed(&store, "Pizza", City::Ramallah).await;
        seed(&store, "Pizza House", City::Ramallah).await;

        let in_city = store
            .search_by_name_in_city("Pizza ", City::Ramallah, page(10, 1))
            .await
            .unwrap();
        let names: Vec<_> = in_city.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza House"]);

        let global = store.search_by_name(" House", page(10, 1)).await.unwrap();
        assert_eq!(global.len(), 1);
        assert_eq!(global[0].name, "Pizza House");
    }

    #[tokio::test]
    async fn search_in_city_blank_pattern_is_invalid() {
        let db = TestDb::new().await;
        let err = db
            .store()
            .search_by_name_in_city("  ", City::Ramallah, page(10, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn global_search_blank_pattern_matches_all() {
        let db = TestDb::new().await;
        let store = db.store();
        seed(&store, "A", City::Ramallah).await;
        seed(&store, "B", City::Nablus).await;

        let all = store.search_by_name("", page(10, 1)).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let db = TestDb::new().await;
        let store = db.store();
        seed(&store, "100% Hummus", City::Ramallah).await;
        seed(&store, "100 Hummus", City::Ramallah).await;
        seed(&store, "Cafe_One", City::Nablus).await;
        seed(&store, "CafeXOne", City::Nablus).await;

        let pct = store.search_by_name("0%", page(10, 1)).await.unwrap();
        assert_eq!(pct.len(), 1);
        assert_eq!(pct[0].name, "100% Hummus");

        let underscore = store.search_by_name("e_O", page(10, 1)).await.unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].name, "Cafe_One");
    }

    #[tokio::test]
    async fn count_per_city() {
        let db = TestDb::new().await;
        let store = db.store();
        seed(&store, "A", City::Ramallah).await;
        seed(&store, "B", City::Ramallah).await;
        seed(&store, "C", City::Nablus).await;

        assert_eq!(store.count(None).await.unwrap(), 3);
        assert_eq!(store.count(Some(City::Ramallah)).await.unwrap(), 2);
        assert_eq!(store.count(Some(City::Nablus)).await.unwrap(), 1);
    }
}
