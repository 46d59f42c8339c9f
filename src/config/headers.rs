//! Custom probe header parsing.
//!
//! `-H "Name1: Value1; Name2: Value2"` becomes an ordered list of header
//! pairs that the probe applies verbatim.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error_handling::HeaderSpecError;

/// Parses a semicolon-separated `Name: Value` header specification.
///
/// Empty segments are ignored, names and values are trimmed, and the value is
/// everything after the first `:` (so `Referer: http://x` works). An empty
/// specification yields an empty list.
///
/// # Errors
///
/// Returns `HeaderSpecError::MissingSeparator` for a segment without `:`.
pub fn parse_header_spec(spec: &str) -> Result<Vec<(String, String)>, HeaderSpecError> {
    let mut headers = Vec::new();
    for pair in spec.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let Some((name, value)) = pair.split_once(':') else {
            return Err(HeaderSpecError::MissingSeparator(pair.to_string()));
        };
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }
    Ok(headers)
}

/// Builds a `HeaderMap` from parsed header pairs.
///
/// Later pairs with the same (case-insensitive) name replace earlier ones.
///
/// # Errors
///
/// Returns `HeaderSpecError::InvalidName` or `InvalidValue` when a pair is not
/// valid HTTP.
pub fn build_header_map(pairs: &[(String, String)]) -> Result<HeaderMap, HeaderSpecError> {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| HeaderSpecError::InvalidName(name.clone()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| HeaderSpecError::InvalidValue(name.clone()))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
