//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - HTTP client and probe (with custom headers and timeout)
//! - External DNS resolver
//! - Concurrency semaphore
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::Semaphore;

use crate::config::{build_header_map, parse_header_spec, Config};
use crate::dns::{DigResolver, Resolver};
use crate::probe::{HttpProbe, ReqwestProbe};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// A count of zero is treated as one so the run always makes progress.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.max(1)))
}

/// Initializes the external resolver from the config.
///
/// `--nameserver` is passed to dig as `@<server>`.
pub fn init_resolver(config: &Config) -> Arc<dyn Resolver> {
    let mut resolver = DigResolver::new(
        config.resolver_cmd.clone(),
        Duration::from_secs(config.timeout_seconds),
    );
    if let Some(ref server) = config.nameserver {
        resolver = resolver.with_args([format!("@{server}")]);
    }
    Arc::new(resolver)
}

/// Initializes the HTTP probe, parsing the `-H` header specification.
///
/// # Errors
///
/// Fails when the header specification is malformed or the client cannot be
/// built. Both are fatal before any domain is processed.
pub fn init_probe(config: &Config) -> Result<Arc<dyn HttpProbe>> {
    let pairs = parse_header_spec(config.header.as_deref().unwrap_or_default())
        .context("Invalid header specification")?;
    let headers = build_header_map(&pairs).context("Invalid header specification")?;
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    Ok(Arc::new(ReqwestProbe::new(client, headers)))
}
