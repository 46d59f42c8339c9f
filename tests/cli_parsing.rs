//! Tests for command-line parsing into `Config`.

use clap::Parser;
use std::path::PathBuf;
use takeover_scan::{Config, FailOn, LogFormat, LogLevel, ScanMode};

#[test]
fn test_no_arguments_reads_stdin_in_status_mode() {
    let config = Config::try_parse_from(["takeover_scan"]).expect("defaults parse");
    assert!(config.reads_stdin());
    assert_eq!(config.mode, ScanMode::Status);
    assert_eq!(config.timeout_seconds, 5);
    assert_eq!(config.max_concurrency, 1);
    assert_eq!(config.resolver_cmd, "dig");
    assert_eq!(config.fail_on, FailOn::Never);
    assert!(config.output.is_none());
    assert!(!config.simple_output);
}

#[test]
fn test_full_option_set() {
    let config = Config::try_parse_from([
        "takeover_scan",
        "domains.txt",
        "--mode",
        "fingerprint",
        "--fingerprints",
        "https://example.com/fingerprints.json",
        "--timeout-seconds",
        "10",
        "--header",
        "Cookie: a=b",
        "--output",
        "vuln.txt",
        "--report",
        "report.json",
        "--simple-output",
        "--max-concurrency",
        "16",
        "--resolver-cmd",
        "/usr/bin/dig",
        "--nameserver",
        "1.1.1.1",
        "--user-agent",
        "scanner/1.0",
        "--log-level",
        "warn",
        "--log-format",
        "json",
        "--fail-on",
        "any-error",
    ])
    .expect("all options parse");

    assert_eq!(config.file, PathBuf::from("domains.txt"));
    assert_eq!(config.mode, ScanMode::Fingerprint);
    assert_eq!(
        config.fingerprints.as_deref(),
        Some("https://example.com/fingerprints.json")
    );
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.header.as_deref(), Some("Cookie: a=b"));
    assert_eq!(config.output, Some(PathBuf::from("vuln.txt")));
    assert_eq!(config.report, Some(PathBuf::from("report.json")));
    assert!(config.simple_output);
    assert_eq!(config.max_concurrency, 16);
    assert_eq!(config.resolver_cmd, "/usr/bin/dig");
    assert_eq!(config.nameserver.as_deref(), Some("1.1.1.1"));
    assert_eq!(config.user_agent, "scanner/1.0");
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.fail_on, FailOn::AnyError);
}

#[test]
fn test_short_flags() {
    let config = Config::try_parse_from([
        "takeover_scan",
        "-",
        "-t",
        "2",
        "-H",
        "X-A: 1",
        "-o",
        "out.txt",
        "-v",
    ])
    .expect("short flags parse");
    assert!(config.reads_stdin());
    assert_eq!(config.timeout_seconds, 2);
    assert_eq!(config.header.as_deref(), Some("X-A: 1"));
    assert_eq!(config.output, Some(PathBuf::from("out.txt")));
    assert_eq!(config.effective_log_level(), LogLevel::Debug);
}

#[test]
fn test_simple_output_alias() {
    let config = Config::try_parse_from(["takeover_scan", "--so"]).unwrap();
    assert!(config.simple_output);
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(Config::try_parse_from(["takeover_scan", "--timeout-seconds", "soon"]).is_err());
    assert!(Config::try_parse_from(["takeover_scan", "--fail-on", "sometimes"]).is_err());
    assert!(Config::try_parse_from(["takeover_scan", "--log-format", "xml"]).is_err());
    assert!(Config::try_parse_from(["takeover_scan", "--output"]).is_err());
}
