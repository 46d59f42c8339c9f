//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, default catalog)
//! - Custom probe header parsing
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::{build_header_map, parse_header_spec};
pub use types::{Config, FailOn, LogFormat, LogLevel, ScanMode};
