//! Body matching against the catalog.

use super::models::{FingerprintCatalog, ServiceFingerprint};

/// Returns the first matchable entry whose fingerprint occurs in `body`.
///
/// Scan order is catalog order. When one fingerprint is a substring of another
/// the earlier entry wins; the catalog is expected to avoid such overlaps.
pub fn find_match<'a>(body: &str, catalog: &'a FingerprintCatalog) -> Option<&'a ServiceFingerprint> {
    catalog
        .vulnerable_entries()
        .find(|entry| body.contains(entry.fingerprint.as_str()))
}

impl FingerprintCatalog {
    /// Name of the first vulnerable service whose fingerprint occurs in `body`.
    pub fn matches(&self, body: &str) -> Option<&str> {
        find_match(body, self).map(|entry| entry.service.as_str())
    }
}
