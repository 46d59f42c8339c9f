//! Fingerprint catalog loading.
//!
//! A catalog source is either an `http(s)://` URL or a local path. The catalog
//! is loaded once, before any domain is processed, and never refreshed during
//! a run.

mod fetch;
mod local;

use std::path::Path;

use crate::config::DEFAULT_FINGERPRINTS_URL;
use crate::error_handling::CatalogError;
use crate::fingerprint::models::{FingerprintCatalog, ServiceFingerprint};

use fetch::fetch_from_url;
use local::load_from_path;

/// Loads the fingerprint catalog from a URL or local path.
///
/// If `source` is None, the default upstream catalog URL is used.
///
/// # Errors
///
/// `CatalogError::Unavailable` when the source cannot be read or answers with
/// a non-success status, `CatalogError::Malformed` when the JSON does not
/// match the expected schema.
pub async fn load_catalog(source: Option<&str>) -> Result<FingerprintCatalog, CatalogError> {
    let source = source.unwrap_or(DEFAULT_FINGERPRINTS_URL);

    let entries = if is_url(source) {
        fetch_from_url(source).await?
    } else {
        load_from_path(Path::new(source)).await?
    };

    let catalog = FingerprintCatalog::new(entries, source);
    log::info!(
        "Loaded {} fingerprints ({} usable for matching) from {}",
        catalog.len(),
        catalog.vulnerable_entries().count(),
        source
    );
    Ok(catalog)
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Decodes a JSON array of fingerprints.
pub(crate) fn parse_catalog_json(
    json: &str,
    source_name: &str,
) -> Result<Vec<ServiceFingerprint>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Malformed {
        source_name: source_name.to_string(),
        source,
    })
}
