//! Response types for the iTunes `lookup` endpoint.
//!
//! ## Observed shape
//!
//! The endpoint wraps matches in `{"resultCount": N, "results": [...]}`. A
//! lookup by id or bundle id yields zero or one result; an unknown id is a
//! 200 with `resultCount: 0`, not a 404.
//!
//! Optional fields are usually omitted (e.g. `releaseNotes` on first
//! releases, `averageUserRating` on unrated apps) but occasionally sent as
//! `null`; both cases yield the field's default. Dates are RFC 3339 UTC
//! strings such as `"2009-12-03T08:00:00Z"`. `fileSizeBytes` is a decimal
//! string, and `genreIds` is an array of numeric strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Top-level response from `GET /lookup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub result_count: usize,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<AppRecord>,
}

/// A single App Store listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub screenshot_urls: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ipad_screenshot_urls: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub appletv_screenshot_urls: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub artwork_url60: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artwork_url100: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artwork_url512: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist_view_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub supported_devices: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub advisories: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_game_center_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    /// `"software"` for iOS apps, `"mac-software"` for macOS apps.
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub track_censored_name: String,
    #[serde(rename = "languageCodesISO2A")]
    #[serde(deserialize_with = "null_as_default")]
    pub language_codes_iso2a: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub file_size_bytes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub seller_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_advisory_rating: String,
    #[serde(deserialize_with = "null_as_default")]
    pub average_user_rating_for_current_version: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub user_rating_count_for_current_version: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_user_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub track_view_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub track_content_rating: String,
    #[serde(deserialize_with = "null_as_default")]
    pub track_name: String,
    /// The numeric store id.
    #[serde(deserialize_with = "null_as_default")]
    pub track_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub genre_ids: Vec<String>,
    pub release_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub formatted_price: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_genre_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_vpp_device_based_licensing_enabled: bool,
    pub current_version_release_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub release_notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_genre_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub seller_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub minimum_os_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub artist_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub bundle_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wrapper_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_rating_count: u64,
}
