//! Parsing of raw command arguments into domain values.
//!
//! Everything here is pure and never fails loudly: callers branch on the
//! `Option`/`bool` result and pick their own rejection message.

use url::Url;
use uuid::Uuid;

use crate::enums::City;

/// Parse a city code typed by a user.
///
/// Case-insensitive after trimming. `-r`/`r` selects Ramallah, `-n`/`n`
/// selects Nablus; the leading dash mirrors CLI option style and is optional.
#[must_use]
pub fn parse_city(input: &str) -> Option<City> {
    match input.trim().to_lowercase().as_str() {
        "-r" | "r" => Some(City::Ramallah),
        "-n" | "n" => Some(City::Nablus),
        _ => None,
    }
}

/// Accept only absolute `http` / `https` URLs.
///
/// Blank input is rejected here; callers treat blank as "no URL" before
/// validating.
#[must_use]
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// Trim a restaurant name, returning `None` when nothing is left.
#[must_use]
pub fn normalize_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trim an optional URL, mapping blank to `None`.
#[must_use]
pub fn normalize_url(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Parse a restaurant id as delivered by autocomplete.
#[must_use]
pub fn parse_restaurant_id(input: &str) -> Option<Uuid> {
    Uuid::parse_str(input.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-r")]
    #[case("R")]
    #[case("r")]
    #[case("  -R  ")]
    fn ramallah_codes(#[case] input: &str) {
        assert_eq!(parse_city(input), Some(City::Ramallah));
    }

    #[rstest]
    #[case("-n")]
    #[case("N")]
    #[case("n")]
    #[case("-N\t")]
    fn nablus_codes(#[case] input: &str) {
        assert_eq!(parse_city(input), Some(City::Nablus));
    }

    #[rstest]
    #[case("")]
    #[case("x")]
    #[case("ramallah")]
    #[case("--r")]
    #[case("- r")]
    fn unknown_codes_rejected(#[case] input: &str) {
        assert_eq!(parse_city(input), None);
    }

    #[rstest]
    #[case("http://x.com")]
    #[case("https://x.com/path?q=1")]
    #[case("HTTPS://Example.org")]
    fn valid_urls(#[case] input: &str) {
        assert!(is_valid_url(input));
    }

    #[rstest]
    #[case("ftp://x.com")]
    #[case("javascript:alert(1)")]
    #[case("not a url")]
    #[case("/relative/path")]
    #[case("x.com")]
    #[case("")]
    fn invalid_urls(#[case] input: &str) {
        assert!(!is_valid_url(input));
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(normalize_name("  Joe's  ").as_deref(), Some("Joe's"));
        assert_eq!(normalize_name("   "), None);
    }

    #[test]
    fn blank_url_normalizes_to_none() {
        assert_eq!(normalize_url(Some("  ")), None);
        assert_eq!(normalize_url(None), None);
        assert_eq!(
            normalize_url(Some(" https://a.b ")).as_deref(),
            Some("https://a.b")
        );
    }

    #[test]
    fn restaurant_id_parsing() {
        let id = Uuid::new_v4();
        assert_eq!(parse_restaurant_id(&id.to_string()), Some(id));
        assert_eq!(parse_restaurant_id("not-an-id"), None);
    }
}
