//! Local file loading for the fingerprint catalog.

use std::path::Path;
use tokio::fs;

use crate::error_handling::CatalogError;
use crate::fingerprint::models::ServiceFingerprint;

use super::parse_catalog_json;

/// Loads catalog entries from a local JSON file.
pub(crate) async fn load_from_path(path: &Path) -> Result<Vec<ServiceFingerprint>, CatalogError> {
    let source_name = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::Unavailable {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?;

    parse_catalog_json(&content, &source_name)
}
