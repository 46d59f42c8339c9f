//! DNS resolution and output parsing.
//!
//! This module provides:
//! - A [`Resolver`] capability backed by an external `dig`-style command
//! - Parsing of the command's text output into header and answer records
//!
//! Parsing is infallible; a missing header or answer is a normal result.

mod extract;
mod records;
mod resolution;

// Re-export public API
pub use extract::{
    extract_answer, extract_cname_chain, extract_header, resolver_unreachable, split_lines,
};
pub use records::{parse_response, AnswerRecord, DnsHeader, DnsResponse, STATUS_NO_SERVERS};
pub use resolution::{DigResolver, Resolver};
