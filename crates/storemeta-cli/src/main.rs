mod lookup;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storemeta")]
#[command(about = "Look up app metadata from the App Store and Play Store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up an App Store listing by store id or bundle id.
    Appstore(lookup::AppStoreArgs),
    /// Scrape a Play Store details page by bundle id.
    Playstore(lookup::PlayStoreArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storemeta_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Commands::Appstore(args) => lookup::run_appstore(&config, args).await?,
        Commands::Playstore(args) => lookup::run_playstore(&config, args).await?,
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_appstore_with_both_keys() {
        let cli = Cli::try_parse_from([
            "storemeta",
            "appstore",
            "--id",
            "340368403",
            "--bundle-id",
            "com.cookpad",
            "--country",
            "JP",
        ])
        .unwrap();
        let Commands::Appstore(args) = cli.command else {
            panic!("expected appstore subcommand");
        };
        assert_eq!(args.id, Some(340_368_403));
        assert_eq!(args.bundle_id.as_deref(), Some("com.cookpad"));
        assert_eq!(args.country.as_deref(), Some("JP"));
    }

    #[test]
    fn appstore_requires_a_key() {
        assert!(Cli::try_parse_from(["storemeta", "appstore"]).is_err());
    }

    #[test]
    fn parses_playstore_bundle_id() {
        let cli = Cli::try_parse_from([
            "storemeta",
            "playstore",
            "com.cookpad.android.activities",
            "--lang",
            "ja",
        ])
        .unwrap();
        let Commands::Playstore(args) = cli.command else {
            panic!("expected playstore subcommand");
        };
        assert_eq!(args.bundle_id, "com.cookpad.android.activities");
        assert_eq!(args.lang.as_deref(), Some("ja"));
    }
}
