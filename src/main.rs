//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `takeover_scan` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit code selection
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use takeover_scan::initialization::init_logger_with;
use takeover_scan::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.effective_log_level().into(), config.log_format)
        .context("Failed to initialize logger")?;

    let fail_on = config.fail_on;
    match run_scan(config).await {
        Ok(report) => {
            let code = report.exit_code(fail_on);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("takeover_scan error: {:#}", e);
            process::exit(1);
        }
    }
}
