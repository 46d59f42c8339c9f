//! Structured views of resolver output.

use serde::Serialize;

use super::extract::{
    extract_answer, extract_cname_chain, extract_header, resolver_unreachable, split_lines,
};

/// Status reported when dig could not reach any nameserver.
///
/// dig prints no header in that case, only a `;; ... no servers could be
/// reached` diagnostic, so this literal stands in for the header status.
pub const STATUS_NO_SERVERS: &str = "no servers could be reached.";

/// The `->>HEADER<<-` fields of a dig response.
///
/// All fields are `None` when no header line was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DnsHeader {
    pub opcode: Option<String>,
    pub status: Option<String>,
    pub id: Option<String>,
}

impl DnsHeader {
    /// True when no header line was found.
    pub fn is_empty(&self) -> bool {
        self.opcode.is_none() && self.status.is_none() && self.id.is_none()
    }
}

/// One `IN CNAME` line of the answer section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    /// Owner name as printed by the resolver (trailing dot kept)
    pub subdomain: String,
    pub ttl: String,
    /// Canonical name with its trailing dot stripped
    pub cname: String,
}

/// Everything the classifier needs from one resolver invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DnsResponse {
    #[serde(skip)]
    pub lines: Vec<String>,
    pub header: DnsHeader,
    /// First CNAME hop
    pub answer: Option<AnswerRecord>,
    /// Every CNAME hop, in output order
    pub chain: Vec<AnswerRecord>,
}

impl DnsResponse {
    /// Status used for classification.
    ///
    /// Falls back to [`STATUS_NO_SERVERS`] when the header is missing and dig
    /// reported that no nameserver was reachable.
    pub fn status(&self) -> Option<&str> {
        match self.header.status.as_deref() {
            Some(status) => Some(status),
            None if resolver_unreachable(&self.lines) => Some(STATUS_NO_SERVERS),
            None => None,
        }
    }

    /// Final target of the CNAME chain, if any.
    pub fn final_target(&self) -> Option<&str> {
        self.chain.last().map(|record| record.cname.as_str())
    }
}

/// Parses raw resolver output into a `DnsResponse`. Never fails.
pub fn parse_response(raw: &str) -> DnsResponse {
    let lines = split_lines(raw);
    let header = extract_header(&lines);
    let answer = extract_answer(&lines);
    let chain = extract_cname_chain(&lines);
    DnsResponse {
        lines,
        header,
        answer,
        chain,
    }
}
