//! URL fetching for the fingerprint catalog.

use std::time::Duration;

use crate::config::CATALOG_FETCH_TIMEOUT_SECS;
use crate::error_handling::CatalogError;
use crate::fingerprint::models::ServiceFingerprint;

use super::parse_catalog_json;

/// Fetches catalog entries from a URL.
///
/// Any transport failure or non-success status is `CatalogError::Unavailable`.
pub(crate) async fn fetch_from_url(url: &str) -> Result<Vec<ServiceFingerprint>, CatalogError> {
    let unavailable = |reason: String| CatalogError::Unavailable {
        source_name: url.to_string(),
        reason,
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(CATALOG_FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| unavailable(e.to_string()))?;

    log::debug!("Fetching fingerprint catalog from: {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| unavailable(e.to_string()))?;
    if !response.status().is_success() {
        return Err(unavailable(format!("bad status: {}", response.status())));
    }

    let json_text = response
        .text()
        .await
        .map_err(|e| unavailable(format!("reading response body failed: {e}")))?;

    parse_catalog_json(&json_text, url)
}
