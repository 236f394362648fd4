use std::fmt;

use storemeta_core::StoreError;

/// Selects which App Store listing to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// Numeric App Store id (the `trackId`, e.g. `340368403`).
    StoreId(u64),
    /// Platform bundle identifier (e.g. `"com.cookpad"`).
    BundleId(String),
}

impl LookupKey {
    #[must_use]
    pub fn store_id(id: u64) -> Self {
        Self::StoreId(id)
    }

    #[must_use]
    pub fn bundle_id(id: impl Into<String>) -> Self {
        Self::BundleId(id.into())
    }

    /// Builds a key from two optional inputs, such as CLI flags.
    ///
    /// The store id wins when both are given. An empty bundle id counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] when neither input is usable.
    pub fn from_parts(store_id: Option<u64>, bundle_id: Option<&str>) -> Result<Self, StoreError> {
        match (store_id, bundle_id.filter(|b| !b.is_empty())) {
            (Some(id), _) => Ok(Self::StoreId(id)),
            (None, Some(bundle)) => Ok(Self::BundleId(bundle.to_owned())),
            (None, None) => Err(empty_key_error()),
        }
    }

    /// The query parameter this key resolves to: `id=<storeID>` or
    /// `bundleId=<bundleID>`.
    pub(crate) fn to_param(&self) -> Result<(&'static str, String), StoreError> {
        match self {
            Self::StoreId(id) => Ok(("id", id.to_string())),
            Self::BundleId(bundle) if !bundle.is_empty() => Ok(("bundleId", bundle.clone())),
            Self::BundleId(_) => Err(empty_key_error()),
        }
    }
}

fn empty_key_error() -> StoreError {
    StoreError::InvalidKey("both store id and bundle id are empty".to_string())
}

impl From<u64> for LookupKey {
    fn from(id: u64) -> Self {
        Self::StoreId(id)
    }
}

impl From<&str> for LookupKey {
    fn from(bundle: &str) -> Self {
        Self::BundleId(bundle.to_owned())
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StoreId(id) => write!(f, "id={id}"),
            Self::BundleId(bundle) => write!(f, "bundleId={bundle}"),
        }
    }
}
