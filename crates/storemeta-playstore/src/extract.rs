//! Best-effort extraction of a [`Detail`] from a Play Store details page.
//!
//! The page has no published schema. Only a handful of anchors are stable in
//! practice: the `<meta>` tags in `<head>`, the `main-title` `<title>`, the
//! `itemprop` image and genre link, and the developer listing link. Each rule
//! below reads exactly one of those anchors and returns its own value, so a
//! missing or reshaped anchor only empties the field it feeds.

use std::sync::LazyLock;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::types::Detail;

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"head > title[id="main-title"]"#));
static META: LazyLock<Selector> = LazyLock::new(|| selector("head > meta"));
static COVER_ART: LazyLock<Selector> = LazyLock::new(|| selector(r#"img[itemprop="image"]"#));
static DEVELOPER_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"a[href^="/store/apps/dev?id="]"#));
static GENRE_LINK: LazyLock<Selector> = LazyLock::new(|| selector(r#"a[itemprop="genre"]"#));

// The rating badge only carries an obfuscated style class; there is no
// semantic marker for it. Expect to update this when the page is restyled.
// Alt text looks like "Rated for 3+" (en) or "3 歳以上" (ja).
static CONTENT_RATING: LazyLock<Selector> = LazyLock::new(|| selector(".E1GfKc"));

const PLAY_ORIGIN: &str = "https://play.google.com/";
const CATEGORY_PREFIX: &str = "/store/apps/category/";

const META_DESCRIPTION: &str = "description";
const META_DEVELOPER_URL: &str = "appstore:developer_url";
const META_BUNDLE_ID: &str = "appstore:bundle_id";
const META_STORE_ID: &str = "appstore:store_id";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Fields sourced from `<head>` `<meta name=… content=…>` tags.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct MetaFields {
    pub description: String,
    pub developer_url: String,
    pub bundle_id: String,
    pub store_id: String,
}

/// An `(id, display name)` pair read from a link.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct LinkedName {
    pub id: String,
    pub name: String,
}

/// Runs every extraction rule against `html`.
///
/// Never fails: HTML parsing is error-tolerant, and each rule falls back to
/// an empty value on its own.
#[must_use]
pub fn parse_detail(html: &str) -> Detail {
    let doc = Html::parse_document(html);

    let meta = extract_meta(&doc);
    let developer = extract_developer(&doc);
    let genre = extract_genre(&doc);

    Detail {
        title: extract_title(&doc),
        description: meta.description,
        cover_art_url: extract_cover_art(&doc),
        content_rating: extract_content_rating(&doc),
        genre_id: genre.id,
        genre: genre.name,
        developer_id: developer.id,
        developer: developer.name,
        developer_url: meta.developer_url,
        bundle_id: meta.bundle_id,
        store_id: meta.store_id,
    }
}

/// Text of `<title id="main-title">` without the trailing site name.
pub(crate) fn extract_title(doc: &Html) -> String {
    let Some(title) = doc.select(&TITLE).next() else {
        tracing::debug!(rule = "title", "anchor not found, leaving field empty");
        return String::new();
    };
    strip_site_suffix(&element_text(title)).to_owned()
}

/// Drops the last `-` and everything after it, plus the one character before
/// the hyphen (the separator space in `"Name - Apps on Google Play"`).
///
/// A hyphen in the first two bytes is kept, so `"-x"` stays as is.
pub(crate) fn strip_site_suffix(title: &str) -> &str {
    match title.rfind('-') {
        Some(idx) if idx > 1 => {
            let mut head = title[..idx].chars();
            head.next_back();
            head.as_str()
        }
        _ => title,
    }
}

pub(crate) fn extract_meta(doc: &Html) -> MetaFields {
    let mut fields = MetaFields::default();
    for meta in doc.select(&META) {
        let Some(name) = meta.value().attr("name") else {
            continue;
        };
        let content = meta.value().attr("content").unwrap_or_default().to_owned();
        match name {
            META_DESCRIPTION => fields.description = content,
            META_DEVELOPER_URL => fields.developer_url = content,
            META_BUNDLE_ID => fields.bundle_id = content,
            META_STORE_ID => fields.store_id = content,
            _ => {}
        }
    }
    fields
}

pub(crate) fn extract_cover_art(doc: &Html) -> String {
    let src = doc
        .select(&COVER_ART)
        .next()
        .and_then(|img| img.value().attr("src"));
    if src.is_none() {
        tracing::debug!(rule = "cover_art", "anchor not found, leaving field empty");
    }
    src.unwrap_or_default().to_owned()
}

/// Developer id from the `id` query parameter of the developer listing link,
/// name from the link text.
pub(crate) fn extract_developer(doc: &Html) -> LinkedName {
    let Some(link) = doc.select(&DEVELOPER_LINK).next() else {
        tracing::debug!(rule = "developer", "anchor not found, leaving fields empty");
        return LinkedName::default();
    };
    let id = link
        .value()
        .attr("href")
        .and_then(|href| query_value(href, "id"))
        .unwrap_or_default();
    LinkedName {
        id,
        name: element_text(link),
    }
}

/// Genre id from the category path, name from the link text.
pub(crate) fn extract_genre(doc: &Html) -> LinkedName {
    let Some(link) = doc.select(&GENRE_LINK).next() else {
        tracing::debug!(rule = "genre", "anchor not found, leaving fields empty");
        return LinkedName::default();
    };
    let id = link
        .value()
        .attr("href")
        .map(|href| href.strip_prefix(CATEGORY_PREFIX).unwrap_or(href).to_owned())
        .unwrap_or_default();
    LinkedName {
        id,
        name: element_text(link),
    }
}

pub(crate) fn extract_content_rating(doc: &Html) -> String {
    let alt = doc
        .select(&CONTENT_RATING)
        .next()
        .and_then(|badge| badge.value().attr("alt"));
    if alt.is_none() {
        tracing::debug!(rule = "content_rating", "anchor not found, leaving field empty");
    }
    alt.unwrap_or_default().to_owned()
}

/// Concatenated descendant text, trimmed.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_owned()
}

/// Resolves a site-relative `href` and returns the first value of `name`.
fn query_value(href: &str, name: &str) -> Option<String> {
    let url = Url::parse(PLAY_ORIGIN).ok()?.join(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
