use std::time::Duration;

use clap::{ArgGroup, Args};
use storemeta_appstore::{AppStoreClient, LookupKey};
use storemeta_core::AppConfig;
use storemeta_playstore::PlayStoreClient;

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("key")
        .required(true)
        .multiple(true)
        .args(["id", "bundle_id"]),
))]
pub(crate) struct AppStoreArgs {
    /// Numeric App Store id. Wins over `--bundle-id` when both are given.
    #[arg(long)]
    pub id: Option<u64>,
    #[arg(long)]
    pub bundle_id: Option<String>,
    /// Overrides `STOREMETA_LANG` (e.g. `ja_jp`).
    #[arg(long)]
    pub lang: Option<String>,
    /// Overrides `STOREMETA_COUNTRY` (e.g. `JP`).
    #[arg(long)]
    pub country: Option<String>,
    /// Overrides `STOREMETA_REQUEST_TIMEOUT_SECS`.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Args)]
pub(crate) struct PlayStoreArgs {
    pub bundle_id: String,
    /// Overrides `STOREMETA_LANG` (e.g. `ja`).
    #[arg(long)]
    pub lang: Option<String>,
    /// Overrides `STOREMETA_REQUEST_TIMEOUT_SECS`.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

pub(crate) async fn run_appstore(config: &AppConfig, args: AppStoreArgs) -> anyhow::Result<String> {
    let key = LookupKey::from_parts(args.id, args.bundle_id.as_deref())?;

    let mut builder = AppStoreClient::builder()
        .user_agent(config.user_agent.clone())
        .timeout(timeout(config, args.timeout_secs));
    if let Some(lang) = args.lang.or_else(|| config.lang.clone()) {
        builder = builder.lang(lang);
    }
    if let Some(country) = args.country.or_else(|| config.country.clone()) {
        builder = builder.country(country);
    }
    let client = builder.build()?;

    tracing::info!(%key, "looking up app store listing");
    let response = client.lookup_with_cancel(&key, ctrl_c()).await?;
    if response.results.is_empty() {
        tracing::warn!(%key, "app store returned no results");
    }
    Ok(serde_json::to_string_pretty(&response)?)
}

pub(crate) async fn run_playstore(
    config: &AppConfig,
    args: PlayStoreArgs,
) -> anyhow::Result<String> {
    let mut builder = PlayStoreClient::builder()
        .user_agent(config.user_agent.clone())
        .timeout(timeout(config, args.timeout_secs));
    if let Some(lang) = args.lang.or_else(|| config.lang.clone()) {
        builder = builder.lang(lang);
    }
    let client = builder.build()?;

    tracing::info!(bundle_id = %args.bundle_id, "fetching play store details page");
    let detail = client.get_with_cancel(&args.bundle_id, ctrl_c()).await?;
    Ok(serde_json::to_string_pretty(&detail)?)
}

fn timeout(config: &AppConfig, override_secs: Option<u64>) -> Duration {
    override_secs.map_or_else(|| config.request_timeout(), Duration::from_secs)
}

/// Completes on Ctrl-C. If the signal handler cannot be installed, never completes.
async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c; lookup cannot be interrupted");
        std::future::pending::<()>().await;
    }
}
