//! Play Store metadata lookup by scraping the public app details page.
//!
//! ```no_run
//! # async fn run() -> Result<(), storemeta_core::StoreError> {
//! use storemeta_playstore::PlayStoreClient;
//!
//! let client = PlayStoreClient::builder().lang("ja").build()?;
//! let detail = client.get("com.cookpad.android.activities").await?;
//! println!("{} by {}", detail.title, detail.developer);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod extract;
pub mod types;

pub use client::{parse_details_page, PlayStoreClient, PlayStoreClientBuilder};
pub use extract::parse_detail;
pub use types::Detail;
