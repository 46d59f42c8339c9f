//! Data structures for the fingerprint catalog.
//!
//! - `ServiceFingerprint`: one entry of the catalog JSON array
//! - `CatalogMetadata`: where and when the catalog was loaded
//! - `FingerprintCatalog`: the immutable, ordered set of entries

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A known third-party service and how to recognize it.
///
/// Field names follow the upstream `fingerprints.json` schema. `service`,
/// `fingerprint` and `vulnerable` are required; the descriptive fields default
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFingerprint {
    #[serde(default)]
    pub cicd_pass: bool,
    /// CNAME target suffixes served by this service
    #[serde(default)]
    pub cname: Vec<String>,
    #[serde(default)]
    pub discussion: String,
    #[serde(default)]
    pub documentation: String,
    /// Substring of the response body shown for an unclaimed resource
    pub fingerprint: String,
    #[serde(default)]
    pub http_status: Option<u16>,
    /// Takeover is signalled by NXDOMAIN rather than by the body
    #[serde(default)]
    pub nxdomain: bool,
    pub service: String,
    /// Free-form status text ("Vulnerable", "Not vulnerable", "Edge case")
    #[serde(default)]
    pub status: String,
    pub vulnerable: bool,
}

impl ServiceFingerprint {
    /// Whether this entry takes part in body matching at all.
    ///
    /// Entries with an empty fingerprint are excluded, otherwise they would
    /// match every body.
    pub fn is_matchable(&self) -> bool {
        self.vulnerable && !self.fingerprint.is_empty()
    }

    /// Whether `target` (a CNAME, trailing dot optional) belongs to this service.
    pub fn serves_cname(&self, target: &str) -> bool {
        let target = target.trim_end_matches('.').to_ascii_lowercase();
        self.cname.iter().any(|pattern| {
            let pattern = pattern.trim_end_matches('.').to_ascii_lowercase();
            !pattern.is_empty()
                && (target == pattern
                    || target
                        .strip_suffix(pattern.as_str())
                        .is_some_and(|head| head.ends_with('.')))
        })
    }
}

/// Metadata about a loaded catalog.
#[derive(Debug, Clone)]
pub struct CatalogMetadata {
    /// URL or path the catalog came from
    pub source: String,
    pub loaded_at: SystemTime,
}

/// Ordered, immutable fingerprint catalog.
///
/// Loaded once per run and shared behind an `Arc`. Entry order is the source
/// order and decides which service wins when several fingerprints match.
#[derive(Debug, Clone)]
pub struct FingerprintCatalog {
    entries: Vec<ServiceFingerprint>,
    pub metadata: CatalogMetadata,
}

impl FingerprintCatalog {
    pub fn new(entries: Vec<ServiceFingerprint>, source: impl Into<String>) -> Self {
        Self {
            entries,
            metadata: CatalogMetadata {
                source: source.into(),
                loaded_at: SystemTime::now(),
            },
        }
    }

    pub fn entries(&self) -> &[ServiceFingerprint] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that can produce a match, in catalog order.
    pub fn vulnerable_entries(&self) -> impl Iterator<Item = &ServiceFingerprint> {
        self.entries.iter().filter(|e| e.is_matchable())
    }

    /// Services whose CNAME patterns cover `target`.
    pub fn services_for_cname(&self, target: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.serves_cname(target))
            .map(|e| e.service.as_str())
            .collect()
    }
}
