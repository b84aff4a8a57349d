//! Raw argument parsing shared by the handlers. Each helper turns a
//! validation miss into the matching [`Rejection`].

use uuid::Uuid;

use bite_core::enums::City;
use bite_core::validation::{is_valid_url, normalize_name, parse_city, parse_restaurant_id};

use super::Rejection;

pub fn name(raw: &str) -> Result<String, Rejection> {
    normalize_name(raw).ok_or(Rejection::BlankName)
}

pub fn city(raw: &str) -> Result<City, Rejection> {
    parse_city(raw).ok_or(Rejection::InvalidCity)
}

pub fn restaurant_id(raw: &str) -> Result<Uuid, Rejection> {
    parse_restaurant_id(raw).ok_or(Rejection::InvalidId)
}

/// Optional URL for add/upsert: blank means none, anything else must be
/// an absolute http(s) URL.
pub fn optional_url(raw: Option<&str>) -> Result<Option<String>, Rejection> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(url) if is_valid_url(url) => Ok(Some(url.to_string())),
        Some(_) => Err(Rejection::InvalidUrl),
    }
}

/// URL change for update: `None` keeps the current URL, `remove`
/// (any case) clears it, anything else must be a valid URL.
pub fn url_change(raw: Option<&str>) -> Result<Option<Option<String>>, Rejection> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(url) if url.eq_ignore_ascii_case("remove") => Ok(Some(None)),
        Some(url) if is_valid_url(url) => Ok(Some(Some(url.to_string()))),
        Some(_) => Err(Rejection::InvalidUpdateUrl),
    }
}
