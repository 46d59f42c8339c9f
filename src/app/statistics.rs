//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

/// Prints error and info counters to the log, skipping zero counts.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    let info_counts: Vec<(InfoType, usize)> = InfoType::iter()
        .map(|info_type| (info_type, error_stats.get_info_count(info_type)))
        .filter(|(_, count)| *count > 0)
        .collect();
    if !info_counts.is_empty() {
        info!("Info Counts:");
        for (info_type, count) in info_counts {
            info!("   {}: {}", info_type.as_str(), count);
        }
    }
}

/// One-line summary logged at the end of every run.
pub fn print_simple_summary(total: usize, vulnerable: usize, errors: usize, elapsed_seconds: f64) {
    info!(
        "Processed {} domain{} ({} possibly vulnerable, {} error{}) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        vulnerable,
        errors,
        if errors == 1 { "" } else { "s" },
        elapsed_seconds
    );
}
