//! Shared building blocks for the store metadata clients: the error taxonomy,
//! request URL construction, the transport round trip, and process config.

pub mod app_config;
pub mod config;
pub mod error;
pub mod options;
pub mod query;
pub mod transport;

pub use app_config::{AppConfig, DEFAULT_USER_AGENT};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ErrorKind, StoreError};
pub use options::TransportOptions;
pub use query::{build_url, resolve_endpoint, QueryParams};
pub use transport::{fetch, RequestOptions, ACCEPT_HTML, ACCEPT_JSON};
