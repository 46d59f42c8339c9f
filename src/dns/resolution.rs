//! Resolver capability.
//!
//! The scanner never speaks DNS itself. It asks a [`Resolver`] for the text a
//! `dig`-style tool prints for `CNAME <domain>` and parses that text.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, trace};
use tokio::process::Command;

use crate::config::RESOLVER_RECORD_TYPE;
use crate::error_handling::ResolverError;

/// Source of raw resolver output for a domain.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Returns the combined stdout/stderr text of a CNAME query for `domain`.
    async fn query(&self, domain: &str) -> Result<String, ResolverError>;
}

/// Runs an external resolver binary (`dig` by default) as a subprocess.
#[derive(Debug, Clone)]
pub struct DigResolver {
    program: String,
    leading_args: Vec<String>,
    timeout: Duration,
}

impl DigResolver {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            timeout,
        }
    }

    /// Arguments placed before `CNAME <domain>`, e.g. `@1.1.1.1`.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }
}

#[async_trait]
impl Resolver for DigResolver {
    /// Runs `<program> [args..] CNAME <domain>` under the configured deadline.
    ///
    /// The child is killed when the deadline passes. A nonzero exit status is
    /// not an error by itself: dig exits 9 when no server answers and still
    /// prints a useful diagnostic. Only a nonzero exit with no output at all
    /// is reported as a failure.
    async fn query(&self, domain: &str) -> Result<String, ResolverError> {
        if domain.is_empty() || domain.starts_with(['-', '+', '@']) {
            return Err(ResolverError::Failure {
                domain: domain.to_string(),
                reason: "name would be read as a resolver option".to_string(),
            });
        }

        debug!("Running {} {} {}", self.program, RESOLVER_RECORD_TYPE, domain);

        let child = Command::new(&self.program)
            .args(&self.leading_args)
            .arg(RESOLVER_RECORD_TYPE)
            .arg(domain)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ResolverError::Failure {
                domain: domain.to_string(),
                reason: format!("failed to spawn '{}': {e}", self.program),
            })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(ResolverError::Failure {
                    domain: domain.to_string(),
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                return Err(ResolverError::Timeout {
                    domain: domain.to_string(),
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        trace!("Resolver output for {domain}:\n{text}");

        if !output.status.success() && text.trim().is_empty() {
            return Err(ResolverError::Failure {
                domain: domain.to_string(),
                reason: format!("'{}' exited with {}", self.program, output.status),
            });
        }

        Ok(text)
    }
}
