use thiserror::Error;

/// Errors returned by the store clients.
///
/// Every failure class stays distinguishable: local validation, transport,
/// HTTP status, body parsing, and cancellation. Use [`StoreError::kind`] for
/// exhaustive matching or [`StoreError::code`] for the numeric status.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The lookup key was empty or otherwise unusable. Raised before any
    /// network call is made.
    #[error("invalid lookup key: {0}")]
    InvalidKey(String),

    /// A configured base URL override could not be parsed.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// Network, DNS, or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-2xx status. The body has been drained.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body is not valid JSON or does not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The caller's cancel signal fired before the response was read.
    #[error("request to {url} was cancelled")]
    Cancelled { url: String },

    /// The client's configured deadline elapsed before the response was read.
    #[error("request to {url} timed out after {after_ms}ms")]
    TimedOut { url: String, after_ms: u128 },
}

/// Coarse failure class of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Status,
    Parse,
    Cancelled,
}

impl StoreError {
    /// HTTP status carried by a [`StoreError::Status`], `0` for every other variant.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
            _ => 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKey(_) | Self::InvalidBaseUrl { .. } => ErrorKind::Validation,
            Self::Http(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::Deserialize { .. } => ErrorKind::Parse,
            Self::Cancelled { .. } | Self::TimedOut { .. } => ErrorKind::Cancelled,
        }
    }
}

/// Errors from loading process-level configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_code() {
        let err = StoreError::Status {
            status: 404,
            url: "https://example.com/lookup".to_string(),
        };
        assert_eq!(err.code(), 404);
        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 404 from https://example.com/lookup"
        );
    }

    #[test]
    fn non_status_errors_have_zero_code() {
        let err = StoreError::InvalidKey("bundle id is empty".to_string());
        assert_eq!(err.code(), 0);
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = StoreError::Cancelled {
            url: "https://example.com".to_string(),
        };
        assert_eq!(err.code(), 0);
        assert_eq!(err.kind(), ErrorKind::Cancelled);
    }

    #[test]
    fn deserialize_error_is_parse_kind() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::Deserialize {
            context: "lookup".to_string(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn timeout_is_cancellation_kind() {
        let err = StoreError::TimedOut {
            url: "https://example.com".to_string(),
            after_ms: 1500,
        };
        assert_eq!(err.kind(), ErrorKind::Cancelled);
        assert!(err.to_string().contains("1500ms"));
    }
}
