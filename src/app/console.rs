//! Line-oriented console output.
//!
//! Result lines go to stdout. Diagnostics go through `log` (stderr). With
//! `--simple-output` only the bare names of vulnerable domains are printed,
//! so the output can be piped straight into other tools.

use colored::*;

use crate::classify::Verdict;

/// Console printer for per-domain results and the final summary.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    simple: bool,
}

impl Console {
    pub fn new(simple_output: bool) -> Self {
        Self {
            simple: simple_output,
        }
    }

    pub fn requesting(&self, domain: &str) {
        if !self.simple {
            println!("{}", format_requesting(domain));
        }
    }

    pub fn verdict(&self, domain: &str, verdict: &Verdict, probed: bool) {
        if let Some(line) = format_verdict(domain, verdict, self.simple, probed) {
            println!("{line}");
        }
    }

    pub fn summary(&self, vulnerable: &[String]) {
        if self.simple {
            return;
        }
        println!();
        for line in format_summary(vulnerable) {
            println!("{line}");
        }
    }
}

fn format_requesting(domain: &str) -> String {
    format!("[ INFO ] Requesting domain '{domain}'")
        .yellow()
        .to_string()
}

/// The line printed for a verdict, if any.
///
/// Domains that were never probed print nothing here; their DNS state is
/// logged at debug level instead.
fn format_verdict(
    domain: &str,
    verdict: &Verdict,
    simple: bool,
    probed: bool,
) -> Option<String> {
    match verdict {
        Verdict::VulnerableByStatus { domain } if simple => Some(domain.clone()),
        Verdict::VulnerableByFingerprint { domain, .. } if simple => Some(domain.clone()),
        Verdict::VulnerableByStatus { domain } => Some(
            format!("[ VULN ] Domain '{domain}' seems to be vulnerable to subdomain takeover")
                .cyan()
                .bold()
                .to_string(),
        ),
        Verdict::VulnerableByFingerprint { domain, service } => Some(
            format!("[ VULN ] Domain '{domain}' is using '{service}' as service and might be vulnerable")
                .cyan()
                .bold()
                .to_string(),
        ),
        Verdict::NotVulnerable if probed && !simple => Some(
            format!("[ INFO ] Domain '{domain}' is not vulnerable")
                .blue()
                .to_string(),
        ),
        _ => None,
    }
}

fn format_summary(vulnerable: &[String]) -> Vec<String> {
    let mut lines = vec![
        "Results:".cyan().to_string(),
        format!(
            "Found {} domain{} possibly expired, prone to takeover",
            vulnerable.len(),
            if vulnerable.len() == 1 { "" } else { "s" }
        )
        .cyan()
        .to_string(),
    ];
    lines.extend(vulnerable.iter().map(|d| format!(" {}", d.red())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_simple_output_prints_only_vulnerable_domain() {
        plain();
        let verdict = Verdict::VulnerableByStatus {
            domain: "a.example.com".into(),
        };
        assert_eq!(
            format_verdict("a.example.com", &verdict, true, true).as_deref(),
            Some("a.example.com")
        );
        assert_eq!(
            format_verdict("b.example.com", &Verdict::NotVulnerable, true, true),
            None
        );
    }

    #[test]
    fn test_fingerprint_verdict_names_service() {
        plain();
        let verdict = Verdict::VulnerableByFingerprint {
            domain: "a.example.com".into(),
            service: "Heroku".into(),
        };
        let line = format_verdict("a.example.com", &verdict, false, true).unwrap();
        assert!(line.starts_with("[ VULN ]"));
        assert!(line.contains("'Heroku'"));
    }

    #[test]
    fn test_not_vulnerable_line() {
        plain();
        let line =
            format_verdict("a.example.com", &Verdict::NotVulnerable, false, true).unwrap();
        assert_eq!(line, "[ INFO ] Domain 'a.example.com' is not vulnerable");
    }

    #[test]
    fn test_domain_skipped_at_dns_prints_nothing() {
        plain();
        assert_eq!(
            format_verdict("a.example.com", &Verdict::NotVulnerable, false, false),
            None
        );
    }

    #[test]
    fn test_needs_probe_prints_nothing() {
        assert_eq!(
            format_verdict("a.example.com", &Verdict::NeedsProbe, false, false),
            None
        );
    }

    #[test]
    fn test_summary_lists_domains() {
        plain();
        let lines = format_summary(&["a.example.com".to_string(), "b.example.com".to_string()]);
        assert_eq!(lines[0], "Results:");
        assert_eq!(lines[1], "Found 2 domains possibly expired, prone to takeover");
        assert_eq!(lines[2], " a.example.com");
        assert_eq!(lines.len(), 4);

        let lines = format_summary(&["only.example.com".to_string()]);
        assert_eq!(lines[1], "Found 1 domain possibly expired, prone to takeover");
    }
}
