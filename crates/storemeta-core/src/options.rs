use std::time::Duration;

use reqwest::Client;

use crate::app_config::DEFAULT_USER_AGENT;
use crate::error::StoreError;

/// Transport-related options shared by both client builders.
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    /// Caller-supplied client. `reqwest::Client` is a reference-counted handle,
    /// so the caller keeps using its own clone.
    pub http_client: Option<Client>,
    /// Only applied when the default client is built.
    pub user_agent: Option<String>,
    /// Deadline for a whole lookup, from send to the last body byte.
    pub timeout: Option<Duration>,
}

impl TransportOptions {
    /// Returns the injected client, or builds the default one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the default `reqwest::Client` cannot be
    /// constructed (e.g., invalid TLS config).
    pub fn into_client(self) -> Result<Client, StoreError> {
        if let Some(client) = self.http_client {
            return Ok(client);
        }
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()?;
        Ok(client)
    }
}
