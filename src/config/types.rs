//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_RESOLVER_CMD, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How a suspicious domain is confirmed as vulnerable.
///
/// Chosen once per run; never mixed between domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// HTTP 404 from the domain means the service is unclaimed (default)
    Status,
    /// Response body matches a vulnerable service fingerprint
    Fingerprint,
}

/// Exit code policy for recoverable errors.
///
/// Fatal errors always exit with code 1. The number of vulnerable domains
/// never influences the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Exit 0 whenever the run completes
    Never,
    /// Exit 2 when any resolver or probe error was recorded
    AnyError,
}

/// Command-line options and library configuration.
///
/// All options have defaults, so the struct can also be built programmatically
/// with `..Default::default()`.
///
/// # Examples
///
/// ```bash
/// # Status mode (default), domains on stdin
/// cat domains.txt | takeover_scan
///
/// # Fingerprint mode with a local catalog and custom headers
/// takeover_scan domains.txt --mode fingerprint --fingerprints ./fingerprints.json \
///     -H "X-Bug-Bounty: me; Cookie: a=b" -o vulnerable.txt
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "takeover_scan",
    version,
    about = "Resolves CNAME records with dig and flags domains prone to subdomain takeover."
)]
pub struct Config {
    /// File with one domain per line ("-" reads stdin)
    #[arg(value_parser, default_value = "-")]
    pub file: PathBuf,

    /// Vulnerability check: status (404 means unclaimed) or fingerprint
    #[arg(long, value_enum, default_value_t = ScanMode::Status)]
    pub mode: ScanMode,

    /// Fingerprint catalog URL or local path (fingerprint mode only)
    #[arg(long)]
    pub fingerprints: Option<String>,

    /// Timeout in seconds for each dig invocation and each HTTP probe
    #[arg(short = 't', long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Probe headers, semicolon separated (e.g. "Name1: Value1; Name2: Value2")
    #[arg(short = 'H', long)]
    pub header: Option<String>,

    /// Append vulnerable domains to this file, one per line
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Write a JSON report of every processed domain to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print only vulnerable domains on stdout
    #[arg(long, alias = "so")]
    pub simple_output: bool,

    /// Verbose mode (same as --log-level debug)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Number of domains processed concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Resolver binary, invoked as `<cmd> CNAME <domain>`
    #[arg(long, default_value = DEFAULT_RESOLVER_CMD)]
    pub resolver_cmd: String,

    /// Nameserver passed to the resolver as `@<server>`
    #[arg(long)]
    pub nameserver: Option<String>,

    /// HTTP User-Agent header value for probes
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit code policy: never|any-error
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl Config {
    /// Log level after applying `--verbose`.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose && !matches!(self.log_level, LogLevel::Debug | LogLevel::Trace) {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }

    /// Whether input is read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            mode: ScanMode::Status,
            fingerprints: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            header: None,
            output: None,
            report: None,
            simple_output: false,
            verbose: false,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            resolver_cmd: DEFAULT_RESOLVER_CMD.to_string(),
            nameserver: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}
