//! HTTP client for the iTunes Search API `lookup` endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use storemeta_core::{
    build_url, fetch, resolve_endpoint, QueryParams, RequestOptions, StoreError,
    TransportOptions, ACCEPT_JSON,
};

use crate::key::LookupKey;
use crate::types::LookupResponse;

const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";
const LOOKUP_PATH: &str = "/lookup";

/// Client for the App Store lookup API.
///
/// Immutable once built and cheap to clone; one instance can serve any number
/// of concurrent lookups.
#[derive(Debug, Clone)]
pub struct AppStoreClient {
    client: Client,
    endpoint: Url,
    lang: Option<String>,
    country: Option<String>,
    timeout: Option<Duration>,
}

/// Builder for [`AppStoreClient`]. Each setter overwrites any earlier value.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AppStoreClientBuilder {
    transport: TransportOptions,
    base_url: Option<String>,
    lang: Option<String>,
    country: Option<String>,
}

impl AppStoreClientBuilder {
    /// Uses `client` instead of building a default `reqwest::Client`.
    pub fn http_client(mut self, client: Client) -> Self {
        self.transport.http_client = Some(client);
        self
    }

    /// Language tag sent as `lang` (e.g. `"ja_jp"`).
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// ISO 3166-1 alpha-2 storefront sent as `country` (e.g. `"JP"`).
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Replaces `https://itunes.apple.com` (for testing with wiremock).
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
    pub fn build(self) -> Result<AppStoreClient, StoreError> {
        let endpoint = resolve_endpoint(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            LOOKUP_PATH,
        )?;
        let timeout = self.transport.timeout;
        Ok(AppStoreClient {
            client: self.transport.into_client()?,
            endpoint,
            lang: self.lang,
            country: self.country,
            timeout,
        })
    }
}

impl AppStoreClient {
    pub fn builder() -> AppStoreClientBuilder {
        AppStoreClientBuilder::default()
    }

    /// Creates a client with the default transport and no locale parameters.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the default `reqwest::Client` cannot be built.
    pub fn new() -> Result<Self, StoreError> {
        Self::builder().build()
    }

    /// Builds the fully-qualified lookup URL for `key`, including the
    /// configured `lang` and `country`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if `key` carries an empty bundle id.
    pub fn lookup_url(&self, key: &LookupKey) -> Result<Url, StoreError> {
        let (name, value) = key.to_param()?;
        let mut params = QueryParams::new();
        params.set_opt("lang", self.lang.as_deref());
        params.set_opt("country", self.country.as_deref());
        params.set(name, &value);
        Ok(build_url(&self.endpoint, &params))
    }

    /// Looks up a single listing. Drop the returned future to cancel.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidKey`] if `key` is empty (no request is sent).
    /// - [`StoreError::Http`] on network or TLS failure.
    /// - [`StoreError::Status`] on a non-2xx status.
    /// - [`StoreError::Deserialize`] if the body is not a lookup response.
    /// - [`StoreError::TimedOut`] if the configured timeout elapses.
    pub async fn lookup(&self, key: &LookupKey) -> Result<LookupResponse, StoreError> {
        self.lookup_with_cancel(key, std::future::pending()).await
    }

    /// Like [`Self::lookup`], abandoning the request with
    /// [`StoreError::Cancelled`] as soon as `cancel` completes.
    ///
    /// # Errors
    ///
    /// See [`Self::lookup`], plus [`StoreError::Cancelled`].
    pub async fn lookup_with_cancel<C>(
        &self,
        key: &LookupKey,
        cancel: C,
    ) -> Result<LookupResponse, StoreError>
    where
        C: Future<Output = ()>,
    {
        let url = self.lookup_url(key)?;
        let options = RequestOptions {
            accept: ACCEPT_JSON,
            timeout: self.timeout,
        };
        let response = fetch(&self.client, &url, options, cancel, |body| {
            parse_lookup_response(body, key)
        })
        .await?;

        tracing::debug!(
            %key,
            result_count = response.result_count,
            "app store lookup complete"
        );
        Ok(response)
    }
}

/// Deserializes a lookup response body.
///
/// # Errors
///
/// Returns [`StoreError::Deserialize`] if the body is not valid JSON or does
/// not match the expected shape.
pub fn parse_lookup_response(body: &[u8], key: &LookupKey) -> Result<LookupResponse, StoreError> {
    serde_json::from_slice(body).map_err(|e| StoreError::Deserialize {
        context: format!("lookup({key})"),
        source: e,
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
