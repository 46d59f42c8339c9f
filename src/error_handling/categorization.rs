//! Error categorization.
//!
//! Maps transport errors onto the probe error kinds and the statistics counters.

use super::stats::ProcessingStats;
use super::types::{ErrorType, ProbeError};

/// Converts a `reqwest::Error` raised while probing `url` into a `ProbeError`.
///
/// Timeouts are reported separately so the orchestrator can tell a slow
/// service from an unreachable one; every other failure is a network error.
pub fn probe_error_from_reqwest(url: &str, error: reqwest::Error) -> ProbeError {
    if error.is_timeout() {
        ProbeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ProbeError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}

/// Categorizes a `ProbeError` into an `ErrorType`.
pub fn categorize_probe_error(error: &ProbeError) -> ErrorType {
    match error {
        ProbeError::Timeout { .. } => ErrorType::ProbeTimeout,
        ProbeError::InvalidUrl(_) => ErrorType::ProbeInvalidUrl,
        ProbeError::Network { source, .. } => {
            if source.is_connect() {
                ErrorType::ProbeConnectError
            } else if source.is_body() || source.is_decode() {
                ErrorType::ProbeBodyError
            } else {
                ErrorType::ProbeRequestError
            }
        }
    }
}

/// Updates processing statistics based on a `ProbeError`.
pub fn update_probe_error_stats(stats: &ProcessingStats, error: &ProbeError) {
    stats.increment_error(categorize_probe_error(error));
}
