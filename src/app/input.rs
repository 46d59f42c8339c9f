//! Domain input normalization.

use log::warn;

use crate::config::MAX_DOMAIN_LENGTH;

/// Characters that would make the resolver read a name as an option.
const OPTION_PREFIXES: [char; 3] = ['-', '+', '@'];

/// Turns one input line into a domain to scan.
///
/// Trims whitespace and skips blank lines and `#` comments. A leading
/// `http://` or `https://` is kept (the probe honours it). Lines that contain
/// whitespace, start with `-`, `+` or `@`, or are longer than a DNS name can
/// be are rejected with a warning.
pub fn normalize_domain_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    if trimmed.chars().any(char::is_whitespace) {
        warn!("Skipping line containing whitespace: {trimmed}");
        return None;
    }

    if resolver_name(trimmed).starts_with(OPTION_PREFIXES) {
        warn!("Skipping line that looks like a resolver option: {trimmed}");
        return None;
    }

    let host_len = trimmed
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .len();
    if host_len > MAX_DOMAIN_LENGTH {
        let preview = trimmed
            .char_indices()
            .nth(50)
            .map_or(trimmed, |(i, _)| &trimmed[..i]);
        warn!(
            "Skipping domain exceeding maximum length ({} > {}): {}...",
            host_len, MAX_DOMAIN_LENGTH, preview
        );
        return None;
    }

    Some(trimmed.to_string())
}

/// Host name handed to the resolver for an input domain.
///
/// Strips a leading scheme and anything from the first `/` on.
pub fn resolver_name(domain: &str) -> &str {
    let host = domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain);
    host.split('/').next().unwrap_or(host)
}
