use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "storemeta/0.1 (app-metadata)";

/// Process-level settings for the `storemeta` binary.
///
/// Library callers configure each client directly through its builder; this
/// struct only carries the defaults the CLI feeds into those builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Language tag sent as `lang` (App Store) or `hl` (Play Store).
    pub lang: Option<String>,
    /// ISO 3166-1 alpha-2 country sent as `country` (App Store only).
    pub country: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl AppConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
