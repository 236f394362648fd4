//! Request URL construction shared by both store clients.

use std::collections::BTreeMap;

use reqwest::Url;

use crate::error::StoreError;

/// Query parameters for a store request.
///
/// Keys are emitted in ascending order so the same inputs always produce the
/// same URL. Empty values are treated as unset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<&'static str, String>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any earlier value. Empty values are ignored.
    pub fn set(&mut self, key: &'static str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.0.insert(key, value.to_owned());
    }

    pub fn set_opt(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(v) = value {
            self.set(key, v);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Joins a base URL (scheme + host, optionally with a path prefix) and a
/// fixed endpoint path into a parsed [`Url`].
///
/// # Errors
///
/// Returns [`StoreError::InvalidBaseUrl`] if the result is not a valid URL.
pub fn resolve_endpoint(base_url: &str, path: &str) -> Result<Url, StoreError> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| StoreError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Builds the fully-qualified request URL by appending `params` to `endpoint`
/// with form-urlencoded escaping.
#[must_use]
pub fn build_url(endpoint: &Url, params: &QueryParams) -> Url {
    let mut url = endpoint.clone();
    if params.is_empty() {
        return url;
    }
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (k, v) in &params.0 {
            pairs.append_pair(k, v);
        }
    }
    url
}
