//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for the resolver, probe, catalog and startup
//! - Processing statistics tracking (recoverable errors, info metrics)
//! - Categorization of probe errors into statistics counters
//!
//! Fatal errors (catalog, header spec, result file) abort the run before any
//! domain is processed. Everything else is recorded and the run continues.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_probe_error, probe_error_from_reqwest, update_probe_error_stats,
};
pub use stats::ProcessingStats;
pub use types::{
    CatalogError, ErrorType, HeaderSpecError, InfoType, InitializationError, ProbeError,
    ResolverError,
};
