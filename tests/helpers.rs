// Shared test helpers: in-memory resolver and probe doubles, input files.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use takeover_scan::{
    Config, HttpProbe, LogFormat, LogLevel, ProbeError, ProbeResult, Resolver, ResolverError,
};

#[allow(dead_code)]
pub const NXDOMAIN_OUTPUT: &str = "\
; <<>> DiG 9.18.28 <<>> CNAME gone.example.com
;; global options: +cmd
;; Got answer:
;; ->>HEADER<<- opcode: QUERY, status: NXDOMAIN, id: 51234
;; flags: qr rd ra; QUERY: 1, ANSWER: 0, AUTHORITY: 1, ADDITIONAL: 1
";

#[allow(dead_code)]
pub const NOERROR_EMPTY_OUTPUT: &str = "\
; <<>> DiG 9.18.28 <<>> CNAME healthy.example.com
;; Got answer:
;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 1111
;; flags: qr rd ra; QUERY: 1, ANSWER: 0, AUTHORITY: 1, ADDITIONAL: 1
";

/// dig output for a NOERROR answer with one CNAME hop.
#[allow(dead_code)]
pub fn cname_output(domain: &str, target: &str) -> String {
    format!(
        ";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 2222\n\
         ;; ANSWER SECTION:\n\
         {domain}.\t300\tIN\tCNAME\t{target}.\n"
    )
}

/// What the fake resolver answers for a domain.
#[allow(dead_code)]
pub enum FakeAnswer {
    Output(String),
    Timeout,
    Failure,
}

/// Resolver double answering from a table, with a default for unknown names.
pub struct FakeResolver {
    answers: HashMap<String, FakeAnswer>,
    default_output: String,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeResolver {
    pub fn new(default_output: &str) -> Self {
        Self {
            answers: HashMap::new(),
            default_output: default_output.to_string(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, domain: &str, answer: FakeAnswer) -> Self {
        self.answers.insert(domain.to_string(), answer);
        self
    }

    pub fn with_output(self, domain: &str, output: &str) -> Self {
        self.with(domain, FakeAnswer::Output(output.to_string()))
    }

    pub fn queried(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Resolver for FakeResolver {
    async fn query(&self, domain: &str) -> Result<String, ResolverError> {
        self.queries.lock().unwrap().push(domain.to_string());
        match self.answers.get(domain) {
            Some(FakeAnswer::Output(output)) => Ok(output.clone()),
            Some(FakeAnswer::Timeout) => Err(ResolverError::Timeout {
                domain: domain.to_string(),
                seconds: 5,
            }),
            Some(FakeAnswer::Failure) => Err(ResolverError::Failure {
                domain: domain.to_string(),
                reason: "resolver exited without output".to_string(),
            }),
            None => Ok(self.default_output.clone()),
        }
    }
}

/// Probe double answering from a table; unknown domains get `200` with an
/// empty body, domains marked unreachable time out.
pub struct FakeProbe {
    responses: HashMap<String, ProbeResult>,
    unreachable: Vec<String>,
    probed: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeProbe {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            unreachable: Vec::new(),
            probed: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, domain: &str, status_code: u16, body: &str) -> Self {
        self.responses.insert(
            domain.to_string(),
            ProbeResult {
                status_code,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn unreachable(mut self, domain: &str) -> Self {
        self.unreachable.push(domain.to_string());
        self
    }

    pub fn probed(&self) -> Vec<String> {
        let mut probed = self.probed.lock().unwrap().clone();
        probed.sort();
        probed
    }
}

#[async_trait]
impl HttpProbe for FakeProbe {
    async fn probe(&self, domain: &str) -> Result<ProbeResult, ProbeError> {
        self.probed.lock().unwrap().push(domain.to_string());
        if self.unreachable.iter().any(|d| d == domain) {
            return Err(ProbeError::Timeout {
                url: format!("http://{domain}"),
            });
        }
        Ok(self
            .responses
            .get(domain)
            .cloned()
            .unwrap_or(ProbeResult {
                status_code: 200,
                body: String::new(),
            }))
    }
}

/// Writes domains to a temporary file, one per line.
#[allow(dead_code)]
pub fn write_domains_to_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write domain");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// A quiet config reading from `input`.
#[allow(dead_code)]
pub fn create_test_config(input: PathBuf) -> Config {
    Config {
        file: input,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        simple_output: true,
        timeout_seconds: 5,
        user_agent: "takeover_scan_test/1.0".to_string(),
        ..Default::default()
    }
}
