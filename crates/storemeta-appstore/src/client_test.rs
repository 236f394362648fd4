use chrono::{TimeZone, Utc};

use super::*;

const LOOKUP_FIXTURE: &str = include_str!("../testdata/lookup_340368403.json");

fn default_client() -> AppStoreClient {
    AppStoreClient::new().expect("client construction should not fail")
}

// -----------------------------------------------------------------------
// lookup_url
// -----------------------------------------------------------------------

#[test]
fn lookup_url_by_store_id() {
    let url = default_client()
        .lookup_url(&LookupKey::store_id(340_368_403))
        .unwrap();
    assert_eq!(url.as_str(), "https://itunes.apple.com/lookup?id=340368403");
}

#[test]
fn lookup_url_by_bundle_id() {
    let url = default_client()
        .lookup_url(&LookupKey::bundle_id("com.cookpad"))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://itunes.apple.com/lookup?bundleId=com.cookpad"
    );
}

#[test]
fn lookup_url_rejects_empty_key() {
    let err = default_client()
        .lookup_url(&LookupKey::bundle_id(""))
        .unwrap_err();
    assert!(
        matches!(err, StoreError::InvalidKey(_)),
        "expected InvalidKey, got: {err:?}"
    );
}

#[test]
fn lookup_url_prefers_store_id_when_both_given() {
    let key = LookupKey::from_parts(Some(340_368_403), Some("com.cookpad")).unwrap();
    let url = default_client().lookup_url(&key).unwrap();
    assert_eq!(url.as_str(), "https://itunes.apple.com/lookup?id=340368403");
}

#[test]
fn lookup_url_appends_lang_and_country() {
    let client = AppStoreClient::builder()
        .lang("ja_jp")
        .country("JP")
        .build()
        .unwrap();
    let url = client.lookup_url(&LookupKey::store_id(340_368_403)).unwrap();
    assert_eq!(
        url.as_str(),
        "https://itunes.apple.com/lookup?country=JP&id=340368403&lang=ja_jp"
    );
}

#[test]
fn later_options_override_earlier_ones() {
    let client = AppStoreClient::builder()
        .country("US")
        .lang("en_us")
        .country("JP")
        .build()
        .unwrap();
    let url = client.lookup_url(&LookupKey::bundle_id("com.cookpad")).unwrap();
    assert_eq!(
        url.as_str(),
        "https://itunes.apple.com/lookup?bundleId=com.cookpad&country=JP&lang=en_us"
    );
}

#[test]
fn lookup_url_uses_base_url_override() {
    let client = AppStoreClient::builder()
        .base_url("http://127.0.0.1:9999/")
        .build()
        .unwrap();
    let url = client.lookup_url(&LookupKey::store_id(1)).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:9999/lookup?id=1");
}

#[test]
fn build_rejects_invalid_base_url() {
    let err = AppStoreClient::builder()
        .base_url("itunes")
        .build()
        .unwrap_err();
    assert!(
        matches!(err, StoreError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

// -----------------------------------------------------------------------
// parse_lookup_response
// -----------------------------------------------------------------------

#[test]
fn parse_captured_lookup_response() {
    let key = LookupKey::store_id(340_368_403);
    let resp = parse_lookup_response(LOOKUP_FIXTURE.as_bytes(), &key).unwrap();

    assert_eq!(resp.result_count, resp.results.len());
    assert_eq!(resp.result_count, 1);

    let app = &resp.results[0];
    assert_eq!(app.track_id, 340_368_403);
    assert_eq!(app.bundle_id, "com.cookpad");
    assert_eq!(app.artist_name, "Cookpad Inc.");
    assert_eq!(app.primary_genre_id, 6023);
    assert_eq!(app.genre_ids, vec!["6023", "6012"]);
    assert_eq!(app.language_codes_iso2a, vec!["JA"]);
    assert_eq!(app.screenshot_urls.len(), 2);
    assert!(app.appletv_screenshot_urls.is_empty());
    assert!(app.is_vpp_device_based_licensing_enabled);
    assert!(!app.is_game_center_enabled);
    assert_eq!(app.user_rating_count, 512_334);
    assert!((app.average_user_rating - 4.638_71).abs() < f64::EPSILON);
    assert_eq!(
        app.release_date,
        Some(Utc.with_ymd_and_hms(2009, 12, 3, 8, 0, 0).unwrap())
    );
    assert_eq!(
        app.current_version_release_date,
        Some(Utc.with_ymd_and_hms(2020, 4, 20, 9, 42, 13).unwrap())
    );
}

#[test]
fn parse_defaults_missing_fields() {
    let body = br#"{"resultCount":1,"results":[{"trackId":7,"trackName":"Minimal"}]}"#;
    let resp = parse_lookup_response(body, &LookupKey::store_id(7)).unwrap();
    let app = &resp.results[0];
    assert_eq!(app.track_id, 7);
    assert_eq!(app.track_name, "Minimal");
    assert!(app.description.is_empty());
    assert!(app.release_date.is_none());
    assert!(app.screenshot_urls.is_empty());
    assert!(app.price.abs() < f64::EPSILON);
}

#[test]
fn parse_empty_result_set() {
    let body = br#"{"resultCount":0,"results":[]}"#;
    let resp = parse_lookup_response(body, &LookupKey::bundle_id("none")).unwrap();
    assert_eq!(resp.result_count, 0);
    assert!(resp.results.is_empty());
}

#[test]
fn parse_malformed_json_is_deserialize_error() {
    let err = parse_lookup_response(b"<html>oops</html>", &LookupKey::store_id(1)).unwrap_err();
    assert!(
        matches!(err, StoreError::Deserialize { ref context, .. } if context == "lookup(id=1)"),
        "expected Deserialize, got: {err:?}"
    );
    assert_eq!(err.code(), 0);
}

#[test]
fn parse_wrong_type_is_deserialize_error() {
    let body = br#"{"resultCount":"one","results":[]}"#;
    let err = parse_lookup_response(body, &LookupKey::store_id(1)).unwrap_err();
    assert!(matches!(err, StoreError::Deserialize { .. }), "got: {err:?}");
}
