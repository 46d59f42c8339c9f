//! Error type definitions.
//!
//! This module defines all error and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error opening the result file for appending.
    #[error("Cannot open result file '{path}' for writing: {source}")]
    ResultFileError {
        /// Path that could not be opened
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Errors raised while running the external DNS resolver.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// The resolver did not finish before its deadline.
    #[error("DNS resolver timed out after {seconds}s for domain '{domain}'")]
    Timeout {
        /// Domain being resolved
        domain: String,
        /// Deadline that was exceeded
        seconds: u64,
    },

    /// The resolver could not be spawned or produced nothing useful.
    #[error("Could not run DNS resolver for domain '{domain}': {reason}")]
    Failure {
        /// Domain being resolved
        domain: String,
        /// What went wrong
        reason: String,
    },
}

/// Errors raised by the HTTP probe.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// No response arrived within the probe timeout.
    #[error("Probe of '{url}' timed out")]
    Timeout {
        /// Requested URL
        url: String,
    },

    /// Connection-level failure (DNS, refused, reset, TLS, body read).
    #[error("Probe of '{url}' failed: {source}")]
    Network {
        /// Requested URL
        url: String,
        /// Underlying reqwest error
        #[source]
        source: ReqwestError,
    },

    /// The domain could not be turned into a valid request URL.
    #[error("Cannot build probe URL from '{0}'")]
    InvalidUrl(String),
}

/// Errors raised while loading the fingerprint catalog.
///
/// Both variants are fatal at startup when fingerprint mode is selected.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The source could not be read, or the server answered with a non-success status.
    #[error("Fingerprint catalog unavailable from '{source_name}': {reason}")]
    Unavailable {
        /// URL or path of the catalog
        source_name: String,
        /// What went wrong
        reason: String,
    },

    /// The catalog was read but does not match the expected JSON schema.
    #[error("Fingerprint catalog from '{source_name}' is malformed: {source}")]
    Malformed {
        /// URL or path of the catalog
        source_name: String,
        /// JSON decoding error
        #[source]
        source: serde_json::Error,
    },
}

/// Malformed custom header specification (`-H`).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HeaderSpecError {
    /// A pair without a `:` separator.
    #[error("invalid header format: {0}")]
    MissingSeparator(String),

    /// A pair whose name is not a valid HTTP header name.
    #[error("invalid header name: {0}")]
    InvalidName(String),

    /// A pair whose value is not a valid HTTP header value.
    #[error("invalid header value for {0}")]
    InvalidValue(String),
}

/// Types of recoverable errors that can occur while processing a domain.
///
/// None of these stop the run; they are counted and reported at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Resolver errors
    ResolverTimeout,
    ResolverFailure,
    // Probe errors
    ProbeTimeout,
    ProbeConnectError,
    ProbeRequestError,
    ProbeBodyError,
    ProbeInvalidUrl,
    // Output errors
    ResultWriteError,
}

/// Types of informational metrics gathered while processing domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Header status alone warranted a probe (NXDOMAIN, SERVFAIL, ...)
    SuspiciousStatus,
    /// NOERROR with a CNAME answer
    CnameAnswer,
    /// CNAME chain longer than one hop
    MultiHopCname,
    /// NOERROR without any CNAME answer
    HealthyDomain,
    /// Resolver output carried no recognizable header
    MissingHeader,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ResolverTimeout => "DNS resolver timeout",
            ErrorType::ResolverFailure => "DNS resolver failure",
            ErrorType::ProbeTimeout => "HTTP probe timeout",
            ErrorType::ProbeConnectError => "HTTP probe connect error",
            ErrorType::ProbeRequestError => "HTTP probe request error",
            ErrorType::ProbeBodyError => "HTTP probe body error",
            ErrorType::ProbeInvalidUrl => "HTTP probe invalid URL",
            ErrorType::ResultWriteError => "Result file write error",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::SuspiciousStatus => "Suspicious DNS status",
            InfoType::CnameAnswer => "CNAME answer present",
            InfoType::MultiHopCname => "Multi-hop CNAME chain",
            InfoType::HealthyDomain => "Healthy domain (no CNAME)",
            InfoType::MissingHeader => "Resolver output without header",
        }
    }
}

impl From<&ResolverError> for ErrorType {
    fn from(e: &ResolverError) -> Self {
        match e {
            ResolverError::Timeout { .. } => ErrorType::ResolverTimeout,
            ResolverError::Failure { .. } => ErrorType::ResolverFailure,
        }
    }
}
