//! Main application modules.
//!
//! Input normalization, console and file output, the JSON report, progress
//! logging, shutdown handling and statistics printing used by the scan loop.

pub mod console;
pub mod input;
pub mod logging;
pub mod output;
pub mod report;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use console::Console;
pub use input::{normalize_domain_line, resolver_name};
pub use logging::log_progress;
pub use output::ResultSink;
pub use report::{write_report, DomainOutcome};
pub use shutdown::shutdown_gracefully;
pub use statistics::{print_error_statistics, print_simple_summary};
