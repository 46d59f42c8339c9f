//! Service fingerprint catalog.
//!
//! This module provides:
//! - The catalog data model (`ServiceFingerprint`, `FingerprintCatalog`)
//! - Loading the catalog from a URL or local JSON file
//! - Matching a probe response body against the catalog
//!
//! The catalog is an owned, immutable value. Callers load it once and share
//! it with `Arc`; nothing in this module keeps global state.

mod catalog;
mod matching;
mod models;

// Re-export public API
pub use catalog::load_catalog;
pub use matching::find_match;
pub use models::{CatalogMetadata, FingerprintCatalog, ServiceFingerprint};
