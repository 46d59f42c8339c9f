//! Per-domain outcomes and the JSON report.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};

use crate::classify::Verdict;
use crate::dns::DnsResponse;

/// What happened to one domain, for the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainOutcome {
    pub domain: String,
    /// Header status, or the unreachable-resolver literal
    pub dns_status: Option<String>,
    /// CNAME targets in resolution order
    pub cname_chain: Vec<String>,
    pub probe_status: Option<u16>,
    #[serde(serialize_with = "serialize_verdict")]
    pub verdict: Verdict,
    /// Matched service, for fingerprint verdicts
    pub service: Option<String>,
    /// Text of the recoverable error that ended processing, if any
    pub error: Option<String>,
}

impl DomainOutcome {
    /// Outcome for a domain whose resolver output was parsed.
    pub fn resolved(domain: &str, response: &DnsResponse, verdict: Verdict) -> Self {
        Self {
            domain: domain.to_string(),
            dns_status: response.status().map(str::to_string),
            cname_chain: response.chain.iter().map(|r| r.cname.clone()).collect(),
            probe_status: None,
            service: verdict.service().map(str::to_string),
            verdict,
            error: None,
        }
    }

    /// Outcome for a domain the resolver failed on.
    pub fn failed(domain: &str, error: impl ToString) -> Self {
        Self {
            domain: domain.to_string(),
            dns_status: None,
            cname_chain: Vec::new(),
            probe_status: None,
            verdict: Verdict::NotVulnerable,
            service: None,
            error: Some(error.to_string()),
        }
    }

    /// Records the probe status and the verdict it led to.
    pub fn set_probe(&mut self, status_code: u16, verdict: Verdict) {
        self.probe_status = Some(status_code);
        self.service = verdict.service().map(str::to_string);
        self.verdict = verdict;
    }
}

fn serialize_verdict<S: Serializer>(verdict: &Verdict, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(verdict.as_str())
}

/// Writes `report` as pretty-printed JSON, replacing any existing file.
pub async fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(report).context("Failed to serialize report")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}
