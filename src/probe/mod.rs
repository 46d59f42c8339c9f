//! HTTP probe.
//!
//! A probe is a single GET to a suspicious domain. The classifier only needs
//! the status code and the body, so that is all a [`ProbeResult`] carries.

mod request;

use async_trait::async_trait;

use crate::config::DEFAULT_PROBE_SCHEME;
use crate::error_handling::ProbeError;

pub use request::ReqwestProbe;

/// Outcome of one probe request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub status_code: u16,
    pub body: String,
}

/// Issues the confirmation request for a domain.
#[async_trait]
pub trait HttpProbe: Send + Sync {
    async fn probe(&self, domain: &str) -> Result<ProbeResult, ProbeError>;
}

/// Returns `domain` as a request URL, prepending `http://` when it has no scheme.
pub fn normalize_target(domain: &str) -> String {
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("{DEFAULT_PROBE_SCHEME}{domain}")
    }
}
