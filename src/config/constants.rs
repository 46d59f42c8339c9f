//! Configuration constants.
//!
//! This module defines the defaults and operational limits used throughout
//! the application.

/// Default deadline, in seconds, for one resolver invocation and for one probe.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default number of domains processed at once (1 = sequential).
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Progress is logged at this interval in seconds.
pub const LOGGING_INTERVAL: u64 = 5;

/// External resolver binary invoked as `<cmd> CNAME <domain>`.
pub const DEFAULT_RESOLVER_CMD: &str = "dig";

/// Record type passed to the resolver.
pub const RESOLVER_RECORD_TYPE: &str = "CNAME";

/// Default fingerprint catalog.
///
/// The gotakeover copy of the can-i-take-over-xyz fingerprint array. Any file
/// or URL with the same schema can be supplied via `--fingerprints`.
pub const DEFAULT_FINGERPRINTS_URL: &str =
    "https://raw.githubusercontent.com/alexbsec/gotakeover/master/cmd/gotekeover/fingerprints.json";

/// Timeout in seconds for downloading the fingerprint catalog.
pub const CATALOG_FETCH_TIMEOUT_SECS: u64 = 60;

/// Default User-Agent string for probe requests.
///
/// Can be overridden with `--user-agent` or by a `User-Agent` entry in `-H`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum probe body size in bytes (2MB).
/// Bodies are truncated beyond this before fingerprint matching.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Scheme prepended to domains that have none.
pub const DEFAULT_PROBE_SCHEME: &str = "http://";

/// HTTP status that marks an unclaimed service in status mode.
pub const HTTP_STATUS_NOT_FOUND: u16 = 404;

/// Maximum domain length accepted from the input (RFC 1035 limit plus a trailing dot).
pub const MAX_DOMAIN_LENGTH: usize = 254;
