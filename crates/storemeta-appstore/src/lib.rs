//! App Store metadata lookup via the public iTunes Search API.
//!
//! ```no_run
//! # async fn run() -> Result<(), storemeta_core::StoreError> {
//! use storemeta_appstore::{AppStoreClient, LookupKey};
//!
//! let client = AppStoreClient::builder().lang("ja_jp").country("JP").build()?;
//! let resp = client.lookup(&LookupKey::store_id(340_368_403)).await?;
//! # let _ = resp;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod key;
pub mod types;

pub use client::{parse_lookup_response, AppStoreClient, AppStoreClientBuilder};
pub use key::LookupKey;
pub use types::{AppRecord, LookupResponse};
