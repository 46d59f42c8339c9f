//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Logs how many domains have been processed so far and the current rate.
pub fn log_progress(
    start_time: std::time::Instant,
    completed: &AtomicUsize,
    vulnerable: &AtomicUsize,
) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let completed = completed.load(Ordering::SeqCst);
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} domains in {:.2} seconds (~{:.2} domains/sec), {} possibly vulnerable",
        completed,
        elapsed_secs,
        rate,
        vulnerable.load(Ordering::SeqCst)
    );
}
