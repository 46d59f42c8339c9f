//! DNS output extraction utilities.
//!
//! These functions work on the text printed by `dig`. They tolerate arbitrary
//! extra lines and never fail: a missing header or answer is an empty result.

use regex::Regex;
use std::sync::LazyLock;

use super::records::{AnswerRecord, DnsHeader};

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"opcode: (\w+), status: (\w+), id: (\d+)").expect("header pattern is valid")
});

static CNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(\d+)\s+IN\s+CNAME\s+(\S+)\.$").expect("CNAME pattern is valid")
});

/// Splits resolver output into trimmed, non-empty lines, keeping their order.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts opcode/status/id from the first header-shaped line.
///
/// Later header-shaped lines are ignored.
pub fn extract_header(lines: &[String]) -> DnsHeader {
    lines
        .iter()
        .find_map(|line| HEADER_PATTERN.captures(line))
        .map(|caps| DnsHeader {
            opcode: Some(caps[1].to_string()),
            status: Some(caps[2].to_string()),
            id: Some(caps[3].to_string()),
        })
        .unwrap_or_default()
}

fn parse_cname_line(line: &str) -> Option<AnswerRecord> {
    CNAME_PATTERN.captures(line).map(|caps| AnswerRecord {
        subdomain: caps[1].to_string(),
        ttl: caps[2].to_string(),
        cname: caps[3].to_string(),
    })
}

/// Extracts the first `<name> <ttl> IN CNAME <target>.` line.
///
/// The target's trailing dot is required and stripped.
pub fn extract_answer(lines: &[String]) -> Option<AnswerRecord> {
    lines.iter().find_map(|line| parse_cname_line(line))
}

/// Extracts every CNAME line, in the order the resolver printed them.
///
/// dig prints the whole chain in the answer section when the recursive
/// resolver follows it, one hop per line.
pub fn extract_cname_chain(lines: &[String]) -> Vec<AnswerRecord> {
    lines
        .iter()
        .filter_map(|line| parse_cname_line(line))
        .collect()
}

/// True when dig reported that no nameserver could be reached.
pub fn resolver_unreachable(lines: &[String]) -> bool {
    lines
        .iter()
        .any(|line| line.starts_with(";;") && line.contains("no servers could be reached"))
}
