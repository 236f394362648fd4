use serde::Serialize;

/// App metadata scraped from a Play Store details page.
///
/// Every field is best-effort: anything the page does not expose is left as
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    pub title: String,
    pub description: String,
    pub cover_art_url: String,
    pub content_rating: String,

    /// Category slug, as in `https://play.google.com/store/apps/category/{genre_id}`.
    pub genre_id: String,
    pub genre: String,

    /// Numeric developer id, as in `https://play.google.com/store/apps/dev?id={developer_id}`.
    pub developer_id: String,
    pub developer: String,

    /// Developer website, the origin `app-ads.txt` is served from.
    pub developer_url: String,
    pub bundle_id: String,
    pub store_id: String,
}
