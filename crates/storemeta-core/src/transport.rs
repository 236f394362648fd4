//! Single GET round trip shared by both store clients.
//!
//! The request is raced against the caller's cancel signal and the client's
//! optional deadline. Losing the race drops the in-flight request future,
//! which releases the underlying connection.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::StoreError;

pub const ACCEPT_JSON: &str = "application/json";
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8";

/// Per-call transport settings taken from a client's configuration.
#[derive(Debug, Clone, Copy)]
pub struct RequestOptions<'a> {
    pub accept: &'a str,
    pub timeout: Option<Duration>,
}

/// Issues a GET request for `url` and hands the body of a 2xx response to
/// `decode`.
///
/// `cancel` is polled before the request on every wake-up; when it completes
/// first the request is abandoned.
///
/// # Errors
///
/// - [`StoreError::Cancelled`] if `cancel` completes first.
/// - [`StoreError::TimedOut`] if `options.timeout` elapses first.
/// - [`StoreError::Http`] on network, DNS, or TLS failure.
/// - [`StoreError::Status`] on any non-2xx status (the body is drained first).
/// - Whatever `decode` returns for a 2xx body.
pub async fn fetch<T, C, D>(
    client: &Client,
    url: &Url,
    options: RequestOptions<'_>,
    cancel: C,
    decode: D,
) -> Result<T, StoreError>
where
    C: Future<Output = ()>,
    D: FnOnce(&[u8]) -> Result<T, StoreError>,
{
    let timeout = options.timeout;
    let deadline = async move {
        match timeout {
            Some(after) => tokio::time::sleep(after).await,
            None => std::future::pending::<()>().await,
        }
    };

    let body = tokio::select! {
        biased;
        () = cancel => {
            tracing::debug!(%url, "store request cancelled by caller");
            return Err(StoreError::Cancelled { url: url.to_string() });
        }
        () = deadline => {
            let after_ms = timeout.map_or(0, |d| d.as_millis());
            tracing::debug!(%url, %after_ms, "store request timed out");
            return Err(StoreError::TimedOut { url: url.to_string(), after_ms });
        }
        result = read_body(client, url, options.accept) => result?,
    };

    decode(&body)
}

/// Sends the request, validates the status, and reads the full body.
async fn read_body(client: &Client, url: &Url, accept: &str) -> Result<Vec<u8>, StoreError> {
    tracing::debug!(%url, "sending store request");
    let response = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, accept)
        .send()
        .await?;
    let status = response.status();
    tracing::debug!(%url, status = status.as_u16(), "received store response");

    if !status.is_success() {
        // Read the body to the end so the connection can go back to the pool.
        if let Err(error) = response.bytes().await {
            tracing::debug!(%url, %error, "failed to drain error response body");
        }
        return Err(StoreError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.bytes().await?;
    Ok(body.to_vec())
}
