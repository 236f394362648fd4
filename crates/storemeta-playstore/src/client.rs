//! HTTP client for Play Store app details pages.
//!
//! Google publishes no lookup API for the Play Store, so the client fetches
//! the public details page and scrapes it with [`crate::extract`].

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use storemeta_core::{
    build_url, fetch, resolve_endpoint, QueryParams, RequestOptions, StoreError,
    TransportOptions, ACCEPT_HTML,
};

use crate::extract::parse_detail;
use crate::types::Detail;

const DEFAULT_BASE_URL: &str = "https://play.google.com";
const DETAILS_PATH: &str = "/store/apps/details";

/// Client for Play Store details pages.
///
/// Immutable once built and cheap to clone; one instance can serve any number
/// of concurrent lookups.
#[derive(Debug, Clone)]
pub struct PlayStoreClient {
    client: Client,
    endpoint: Url,
    lang: Option<String>,
    timeout: Option<Duration>,
}

/// Builder for [`PlayStoreClient`]. Each setter overwrites any earlier value.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct PlayStoreClientBuilder {
    transport: TransportOptions,
    base_url: Option<String>,
    lang: Option<String>,
}

impl PlayStoreClientBuilder {
    /// Uses `client` instead of building a default `reqwest::Client`.
    pub fn http_client(mut self, client: Client) -> Self {
        self.transport.http_client = Some(client);
        self
    }

    /// Page language sent as `hl` (e.g. `"ja"`).
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Replaces `https://play.google.com` (for testing with wiremock).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.transport.timeout = Some(timeout);
        self
    }

    /// `User-Agent` for the default client. Ignored with [`Self::http_client`].
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.transport.user_agent = Some(user_agent.into());
        self
    }

    /// # Errors
    ///
    /// - [`StoreError::Http`] if the default `reqwest::Client` cannot be built.
    /// - [`StoreError::InvalidBaseUrl`] if the base URL override does not parse.
    pub fn build(self) -> Result<PlayStoreClient, StoreError> {
        let endpoint = resolve_endpoint(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            DETAILS_PATH,
        )?;
        let timeout = self.transport.timeout;
        Ok(PlayStoreClient {
            client: self.transport.into_client()?,
            endpoint,
            lang: self.lang,
            timeout,
        })
    }
}

impl PlayStoreClient {
    pub fn builder() -> PlayStoreClientBuilder {
        PlayStoreClientBuilder::default()
    }

    /// Creates a client with the default transport and no `hl` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the default `reqwest::Client` cannot be built.
    pub fn new() -> Result<Self, StoreError> {
        Self::builder().build()
    }

    /// Builds the details page URL for `bundle_id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if `bundle_id` is empty.
    pub fn details_url(&self, bundle_id: &str) -> Result<Url, StoreError> {
        if bundle_id.is_empty() {
            return Err(StoreError::InvalidKey("bundle id is empty".to_string()));
        }
        let mut params = QueryParams::new();
        params.set_opt("hl", self.lang.as_deref());
        params.set("id", bundle_id);
        Ok(build_url(&self.endpoint, &params))
    }

    /// Fetches and scrapes the details page for `bundle_id`. Drop the returned
    /// future to cancel.
    ///
    /// Fields the page does not expose come back empty; that is not an error.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidKey`] if `bundle_id` is empty (no request is sent).
    /// - [`StoreError::Http`] on network or TLS failure.
    /// - [`StoreError::Status`] on a non-2xx status (404 for unknown apps).
    /// - [`StoreError::TimedOut`] if the configured timeout elapses.
    pub async fn get(&self, bundle_id: &str) -> Result<Detail, StoreError> {
        self.get_with_cancel(bundle_id, std::future::pending()).await
    }

    /// Like [`Self::get`], abandoning the request with
    /// [`StoreError::Cancelled`] as soon as `cancel` completes.
    ///
    /// # Errors
    ///
    /// See [`Self::get`], plus [`StoreError::Cancelled`].
    pub async fn get_with_cancel<C>(&self, bundle_id: &str, cancel: C) -> Result<Detail, StoreError>
    where
        C: Future<Output = ()>,
    {
        let url = self.details_url(bundle_id)?;
        let options = RequestOptions {
            accept: ACCEPT_HTML,
            timeout: self.timeout,
        };
        let detail = fetch(&self.client, &url, options, cancel, |body| {
            Ok(parse_details_page(body))
        })
        .await?;

        tracing::debug!(
            bundle_id,
            title = %detail.title,
            "play store details scraped"
        );
        Ok(detail)
    }
}

/// Decodes a details page body and runs the extraction rules over it.
///
/// Invalid UTF-8 sequences become U+FFFD, so a stray byte only garbles the
/// text around it. Missing page elements leave their fields empty.
#[must_use]
pub fn parse_details_page(body: &[u8]) -> Detail {
    parse_detail(&String::from_utf8_lossy(body))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
