//! Vulnerability classification.
//!
//! Two pure stages:
//! 1. [`decide_probe`]: does the DNS state warrant an HTTP probe?
//! 2. [`classify_probe`]: does the probe result confirm a takeover?
//!
//! Neither stage touches the network, so the same inputs always give the
//! same [`Verdict`].

use serde::Serialize;

use crate::config::{ScanMode, HTTP_STATUS_NOT_FOUND};
use crate::dns::{DnsResponse, STATUS_NO_SERVERS};
use crate::fingerprint::FingerprintCatalog;
use crate::probe::ProbeResult;

/// Header statuses that suggest the CNAME target no longer exists.
const SUSPICIOUS_STATUSES: &[&str] = &["NXDOMAIN", "SERVFAIL", "REFUSED", STATUS_NO_SERVERS];

const STATUS_NOERROR: &str = "NOERROR";

/// Whether a domain should be probed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeDecision {
    Skip,
    Probe,
}

/// Final (or pending) judgement for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    NotVulnerable,
    NeedsProbe,
    VulnerableByStatus { domain: String },
    VulnerableByFingerprint { domain: String, service: String },
}

impl Verdict {
    pub fn is_vulnerable(&self) -> bool {
        matches!(
            self,
            Verdict::VulnerableByStatus { .. } | Verdict::VulnerableByFingerprint { .. }
        )
    }

    /// Snake-case name, matching the serialized `verdict` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::NotVulnerable => "not_vulnerable",
            Verdict::NeedsProbe => "needs_probe",
            Verdict::VulnerableByStatus { .. } => "vulnerable_by_status",
            Verdict::VulnerableByFingerprint { .. } => "vulnerable_by_fingerprint",
        }
    }

    /// Matched service, for fingerprint verdicts.
    pub fn service(&self) -> Option<&str> {
        match self {
            Verdict::VulnerableByFingerprint { service, .. } => Some(service),
            _ => None,
        }
    }
}

/// Run-wide confirmation strategy.
///
/// Fingerprint mode owns a handle to the catalog, so it cannot be selected
/// without one.
#[derive(Debug, Clone, Copy)]
pub enum ClassifierMode<'a> {
    Status,
    Fingerprint(&'a FingerprintCatalog),
}

impl ClassifierMode<'_> {
    pub fn scan_mode(&self) -> ScanMode {
        match self {
            ClassifierMode::Status => ScanMode::Status,
            ClassifierMode::Fingerprint(_) => ScanMode::Fingerprint,
        }
    }
}

/// Decides whether the DNS state warrants a probe.
///
/// - NXDOMAIN, SERVFAIL, REFUSED or "no servers could be reached": probe
/// - NOERROR with a CNAME answer: probe
/// - NOERROR without an answer: skip
/// - anything else, including a missing header: skip
pub fn decide_probe(status: Option<&str>, answer_present: bool) -> ProbeDecision {
    match status {
        Some(s) if SUSPICIOUS_STATUSES.contains(&s) => ProbeDecision::Probe,
        Some(STATUS_NOERROR) if answer_present => ProbeDecision::Probe,
        _ => ProbeDecision::Skip,
    }
}

/// First-stage verdict from parsed resolver output.
pub fn initial_verdict(response: &DnsResponse) -> Verdict {
    match decide_probe(response.status(), !response.chain.is_empty()) {
        ProbeDecision::Probe => Verdict::NeedsProbe,
        ProbeDecision::Skip => Verdict::NotVulnerable,
    }
}

/// Second-stage verdict from a probe result.
///
/// Status mode flags an HTTP 404. Fingerprint mode flags the first catalog
/// entry whose fingerprint occurs in the body.
pub fn classify_probe(mode: ClassifierMode<'_>, domain: &str, result: &ProbeResult) -> Verdict {
    match mode {
        ClassifierMode::Status => {
            if result.status_code == HTTP_STATUS_NOT_FOUND {
                Verdict::VulnerableByStatus {
                    domain: domain.to_string(),
                }
            } else {
                Verdict::NotVulnerable
            }
        }
        ClassifierMode::Fingerprint(catalog) => match catalog.matches(&result.body) {
            Some(service) => Verdict::VulnerableByFingerprint {
                domain: domain.to_string(),
                service: service.to_string(),
            },
            None => Verdict::NotVulnerable,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::parse_response;
    use crate::fingerprint::ServiceFingerprint;

    fn fingerprint(service: &str, fp: &str, vulnerable: bool) -> ServiceFingerprint {
        ServiceFingerprint {
            cicd_pass: false,
            cname: vec![],
            discussion: String::new(),
            documentation: String::new(),
            fingerprint: fp.to_string(),
            http_status: None,
            nxdomain: false,
            service: service.to_string(),
            status: String::new(),
            vulnerable,
        }
    }

    fn probe(status_code: u16, body: &str) -> ProbeResult {
        ProbeResult {
            status_code,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_decide_probe_suspicious_statuses() {
        for status in ["NXDOMAIN", "SERVFAIL", "REFUSED", "no servers could be reached."] {
            assert_eq!(decide_probe(Some(status), false), ProbeDecision::Probe);
            assert_eq!(decide_probe(Some(status), true), ProbeDecision::Probe);
        }
    }

    #[test]
    fn test_decide_probe_noerror() {
        assert_eq!(decide_probe(Some("NOERROR"), false), ProbeDecision::Skip);
        assert_eq!(decide_probe(Some("NOERROR"), true), ProbeDecision::Probe);
    }

    #[test]
    fn test_decide_probe_unknown_status_is_skipped() {
        assert_eq!(decide_probe(Some("garbage"), true), ProbeDecision::Skip);
        assert_eq!(decide_probe(Some("NOTIMP"), false), ProbeDecision::Skip);
        assert_eq!(decide_probe(None, true), ProbeDecision::Skip);
    }

    #[test]
    fn test_initial_verdict_from_resolver_text() {
        let nx = parse_response(";; ->>HEADER<<- opcode: QUERY, status: NXDOMAIN, id: 42");
        assert_eq!(initial_verdict(&nx), Verdict::NeedsProbe);

        let healthy = parse_response(";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 1");
        assert_eq!(initial_verdict(&healthy), Verdict::NotVulnerable);

        let cname = parse_response(
            ";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 1\n\
             a.example.com. 300 IN CNAME a.herokuapp.com.",
        );
        assert_eq!(initial_verdict(&cname), Verdict::NeedsProbe);
    }

    #[test]
    fn test_status_mode_404_is_vulnerable() {
        let verdict = classify_probe(ClassifierMode::Status, "a.example.com", &probe(404, ""));
        assert_eq!(
            verdict,
            Verdict::VulnerableByStatus {
                domain: "a.example.com".into()
            }
        );
        assert!(verdict.is_vulnerable());
        assert_eq!(verdict.service(), None);
    }

    #[test]
    fn test_status_mode_other_codes_are_not_vulnerable() {
        for code in [200, 301, 403, 500] {
            let verdict = classify_probe(ClassifierMode::Status, "a.example.com", &probe(code, ""));
            assert_eq!(verdict, Verdict::NotVulnerable);
        }
    }

    #[test]
    fn test_status_mode_ignores_body() {
        let verdict = classify_probe(
            ClassifierMode::Status,
            "a.example.com",
            &probe(200, "No such app"),
        );
        assert_eq!(verdict, Verdict::NotVulnerable);
    }

    #[test]
    fn test_fingerprint_mode_match() {
        let catalog = FingerprintCatalog::new(
            vec![
                fingerprint("Cloudfront", "Bad request.", false),
                fingerprint("Heroku", "No such app", true),
            ],
            "test",
        );
        let verdict = classify_probe(
            ClassifierMode::Fingerprint(&catalog),
            "a.example.com",
            &probe(200, "<title>No such app</title>"),
        );
        assert_eq!(
            verdict,
            Verdict::VulnerableByFingerprint {
                domain: "a.example.com".into(),
                service: "Heroku".into()
            }
        );
        assert_eq!(verdict.service(), Some("Heroku"));
    }

    #[test]
    fn test_fingerprint_mode_non_vulnerable_entry_only() {
        let catalog =
            FingerprintCatalog::new(vec![fingerprint("Cloudfront", "Bad request.", false)], "test");
        let verdict = classify_probe(
            ClassifierMode::Fingerprint(&catalog),
            "a.example.com",
            &probe(404, "Bad request."),
        );
        assert_eq!(verdict, Verdict::NotVulnerable);
    }

    #[test]
    fn test_fingerprint_mode_empty_fingerprint_never_matches_empty_body() {
        let catalog = FingerprintCatalog::new(vec![fingerprint("Azure", "", true)], "test");
        let verdict = classify_probe(
            ClassifierMode::Fingerprint(&catalog),
            "a.example.com",
            &probe(404, ""),
        );
        assert_eq!(verdict, Verdict::NotVulnerable);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let catalog = FingerprintCatalog::new(vec![fingerprint("Heroku", "No such app", true)], "t");
        let result = probe(404, "No such app");
        let first = classify_probe(ClassifierMode::Fingerprint(&catalog), "a.example.com", &result);
        let second = classify_probe(ClassifierMode::Fingerprint(&catalog), "a.example.com", &result);
        assert_eq!(first, second);
    }

    #[test]
    fn test_classifier_mode_reports_scan_mode() {
        let catalog = FingerprintCatalog::new(vec![], "t");
        assert_eq!(ClassifierMode::Status.scan_mode(), ScanMode::Status);
        assert_eq!(
            ClassifierMode::Fingerprint(&catalog).scan_mode(),
            ScanMode::Fingerprint
        );
    }

    #[test]
    fn test_verdict_serializes_with_tag() {
        let json = serde_json::to_string(&Verdict::VulnerableByFingerprint {
            domain: "a.example.com".into(),
            service: "Heroku".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"verdict":"vulnerable_by_fingerprint","domain":"a.example.com","service":"Heroku"}"#
        );
    }
}
