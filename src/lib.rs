//! takeover_scan library: subdomain takeover detection
//!
//! Resolves each domain's CNAME records with an external `dig`, flags DNS
//! states that point at unclaimed resources, and confirms suspicious domains
//! with an HTTP probe (HTTP 404, or a body fingerprint from a service catalog).
//!
//! # Example
//!
//! ```no_run
//! use takeover_scan::{run_scan, Config, ScanMode};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("domains.txt"),
//!     mode: ScanMode::Fingerprint,
//!     max_concurrency: 10,
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("{} of {} domains possibly vulnerable",
//!          report.vulnerable.len(), report.total_domains);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime and, for real scans, a `dig` binary
//! on the `PATH` (or `Config::resolver_cmd`).

mod app;
mod classify;
pub mod config;
mod dns;
mod error_handling;
mod fingerprint;
pub mod initialization;
mod probe;

// Re-export public API
pub use app::DomainOutcome;
pub use classify::{classify_probe, decide_probe, ClassifierMode, ProbeDecision, Verdict};
pub use config::{Config, FailOn, LogFormat, LogLevel, ScanMode};
pub use dns::{parse_response, AnswerRecord, DigResolver, DnsHeader, DnsResponse, Resolver};
pub use error_handling::{CatalogError, ProbeError, ResolverError};
pub use fingerprint::{load_catalog, FingerprintCatalog, ServiceFingerprint};
pub use probe::{HttpProbe, ProbeResult, ReqwestProbe};
pub use run::{run_scan, run_scan_with, ScanReport};

// Internal run module (contains the main scanning logic)
mod run {
    use anyhow::{Context, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{debug, error, info, warn};
    use serde::Serialize;
    use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
    use tokio_util::sync::CancellationToken;

    use crate::app::{
        log_progress, normalize_domain_line, print_error_statistics, print_simple_summary,
        resolver_name, shutdown_gracefully, write_report, Console, DomainOutcome, ResultSink,
    };
    use crate::classify::{classify_probe, initial_verdict, ClassifierMode, Verdict};
    use crate::config::{Config, FailOn, ScanMode, LOGGING_INTERVAL};
    use crate::dns::{parse_response, DnsResponse, Resolver, STATUS_NO_SERVERS};
    use crate::error_handling::{update_probe_error_stats, ErrorType, InfoType, ProcessingStats};
    use crate::fingerprint::{load_catalog, FingerprintCatalog};
    use crate::initialization::{init_probe, init_resolver, init_semaphore};
    use crate::probe::HttpProbe;

    /// Results of a scan run.
    #[derive(Debug, Clone, Serialize)]
    pub struct ScanReport {
        /// Confirmation strategy used for the run
        pub mode: ScanMode,
        /// Number of domains read from the input (after normalization)
        pub total_domains: usize,
        /// Number of domains that were probed over HTTP
        pub probed: usize,
        /// Vulnerable domains, in the order they were confirmed
        pub vulnerable: Vec<String>,
        /// Number of recoverable errors recorded
        pub errors: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Per-domain outcomes, in input order
        pub outcomes: Vec<DomainOutcome>,
    }

    impl ScanReport {
        /// Process exit code for a completed run.
        ///
        /// Never depends on how many domains were found vulnerable.
        pub fn exit_code(&self, fail_on: FailOn) -> i32 {
            match fail_on {
                FailOn::AnyError if self.errors > 0 => 2,
                _ => 0,
            }
        }
    }

    /// Shared state handed to every domain task.
    struct ScanContext {
        resolver: Arc<dyn Resolver>,
        probe: Arc<dyn HttpProbe>,
        catalog: Option<Arc<FingerprintCatalog>>,
        sink: Arc<ResultSink>,
        stats: Arc<ProcessingStats>,
        console: Console,
        completed: AtomicUsize,
        probed: AtomicUsize,
        vulnerable: AtomicUsize,
    }

    impl ScanContext {
        fn classifier_mode(&self) -> ClassifierMode<'_> {
            match self.catalog.as_deref() {
                Some(catalog) => ClassifierMode::Fingerprint(catalog),
                None => ClassifierMode::Status,
            }
        }
    }

    /// Runs a scan with the provided configuration.
    ///
    /// Reads domains from `config.file` (or stdin), processes them with at most
    /// `config.max_concurrency` in flight, prints results and returns a summary.
    ///
    /// # Errors
    ///
    /// Fails before any domain is processed if:
    /// - The header specification is malformed
    /// - The fingerprint catalog cannot be loaded (fingerprint mode)
    /// - The result file or input file cannot be opened
    ///
    /// Per-domain resolver and probe failures are counted, not returned.
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let probe = init_probe(&config)?;
        let resolver = init_resolver(&config);
        run_scan_with(config, resolver, probe).await
    }

    /// Like [`run_scan`], with caller-supplied resolver and probe.
    pub async fn run_scan_with(
        config: Config,
        resolver: Arc<dyn Resolver>,
        probe: Arc<dyn HttpProbe>,
    ) -> Result<ScanReport> {
        let catalog = match config.mode {
            ScanMode::Fingerprint => Some(Arc::new(
                load_catalog(config.fingerprints.as_deref())
                    .await
                    .context("Failed to load fingerprint catalog")?,
            )),
            ScanMode::Status => None,
        };

        let sink = match config.output {
            Some(ref path) => ResultSink::with_file(path)
                .await
                .context("Failed to open result file")?,
            None => ResultSink::in_memory(),
        };

        let reader: Box<dyn AsyncBufRead + Unpin + Send> = if config.reads_stdin() {
            info!("Reading domains from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        } else {
            let file = tokio::fs::File::open(&config.file)
                .await
                .with_context(|| format!("Failed to open input file {}", config.file.display()))?;
            Box::new(BufReader::new(file))
        };
        let mut lines = reader.lines();

        info!(
            "Starting scan in {:?} mode (max concurrency {})",
            config.mode, config.max_concurrency
        );

        let ctx = Arc::new(ScanContext {
            resolver,
            probe,
            catalog,
            sink: Arc::new(sink),
            stats: Arc::new(ProcessingStats::new()),
            console: Console::new(config.simple_output),
            completed: AtomicUsize::new(0),
            probed: AtomicUsize::new(0),
            vulnerable: AtomicUsize::new(0),
        });

        let start_time = std::time::Instant::now();
        let cancel = CancellationToken::new();
        let cancel_logging = cancel.child_token();
        let ctx_for_logging = Arc::clone(&ctx);
        let logging_task = Some(tokio::task::spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(LOGGING_INTERVAL));
            // The first tick completes immediately
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(start_time, &ctx_for_logging.completed, &ctx_for_logging.vulnerable);
                    }
                    _ = cancel_logging.cancelled() => {
                        break;
                    }
                }
            }
        }));

        let semaphore = init_semaphore(config.max_concurrency);
        let mut tasks = FuturesUnordered::new();
        let mut total_domains = 0usize;

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read line from input: {e}");
                    continue;
                }
            };

            let Some(domain) = normalize_domain_line(&line) else {
                continue;
            };

            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, skipping domain: {domain}");
                    continue;
                }
            };

            let index = total_domains;
            total_domains += 1;

            let ctx = Arc::clone(&ctx);
            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                let outcome = process_domain(&domain, &ctx).await;
                ctx.completed.fetch_add(1, Ordering::SeqCst);
                (index, outcome)
            }));
        }

        let mut outcomes = Vec::with_capacity(total_domains);
        while let Some(task_result) = tasks.next().await {
            match task_result {
                Ok(indexed) => outcomes.push(indexed),
                Err(join_error) => warn!("Task panicked: {:?}", join_error),
            }
        }
        outcomes.sort_by_key(|(index, _)| *index);

        shutdown_gracefully(cancel, logging_task).await;
        log_progress(start_time, &ctx.completed, &ctx.vulnerable);

        let mut report = ScanReport {
            mode: config.mode,
            total_domains,
            probed: ctx.probed.load(Ordering::SeqCst),
            vulnerable: ctx.sink.domains().await,
            errors: ctx.stats.total_errors(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
            outcomes: outcomes.into_iter().map(|(_, outcome)| outcome).collect(),
        };

        if let Some(ref path) = config.report {
            if let Err(e) = write_report(path, &report).await {
                ctx.stats.increment_error(ErrorType::ResultWriteError);
                error!("{e:#}");
                report.errors = ctx.stats.total_errors();
            }
        }

        print_error_statistics(&ctx.stats);
        ctx.console.summary(&report.vulnerable);
        print_simple_summary(
            report.total_domains,
            report.vulnerable.len(),
            report.errors,
            report.elapsed_seconds,
        );

        Ok(report)
    }

    /// Resolves, classifies and (if warranted) probes one domain.
    ///
    /// Never fails: resolver, probe and result-file errors are logged and
    /// counted, and the domain is reported as not vulnerable.
    async fn process_domain(domain: &str, ctx: &ScanContext) -> DomainOutcome {
        ctx.console.requesting(domain);

        let raw = match ctx.resolver.query(resolver_name(domain)).await {
            Ok(raw) => raw,
            Err(e) => {
                ctx.stats.increment_error(ErrorType::from(&e));
                warn!("{e}");
                return DomainOutcome::failed(domain, &e);
            }
        };

        let response = parse_response(&raw);
        record_dns_info(&response, &ctx.stats);
        debug!(
            "{domain}: status {:?}, CNAME chain {:?}",
            response.status(),
            response
                .chain
                .iter()
                .map(|record| record.cname.as_str())
                .collect::<Vec<_>>()
        );

        let verdict = initial_verdict(&response);
        let mut outcome = DomainOutcome::resolved(domain, &response, verdict.clone());
        if verdict != Verdict::NeedsProbe {
            ctx.console.verdict(domain, &verdict, false);
            return outcome;
        }

        ctx.probed.fetch_add(1, Ordering::SeqCst);
        let result = match ctx.probe.probe(domain).await {
            Ok(result) => result,
            Err(e) => {
                update_probe_error_stats(&ctx.stats, &e);
                warn!("Probe failed for {domain}: {e}");
                outcome.verdict = Verdict::NotVulnerable;
                outcome.error = Some(e.to_string());
                return outcome;
            }
        };

        let verdict = classify_probe(ctx.classifier_mode(), domain, &result);
        ctx.console.verdict(domain, &verdict, true);
        if verdict.is_vulnerable() {
            ctx.vulnerable.fetch_add(1, Ordering::SeqCst);
            if let Err(e) = ctx.sink.record(domain).await {
                ctx.stats.increment_error(ErrorType::ResultWriteError);
                error!("Failed to write {domain} to result file: {e}");
            }
        }
        outcome.set_probe(result.status_code, verdict);
        outcome
    }

    fn record_dns_info(response: &DnsResponse, stats: &ProcessingStats) {
        if response.header.is_empty() {
            stats.increment_info(InfoType::MissingHeader);
        }
        if response.chain.len() > 1 {
            stats.increment_info(InfoType::MultiHopCname);
        }
        match response.status() {
            Some("NOERROR") if response.chain.is_empty() => {
                stats.increment_info(InfoType::HealthyDomain)
            }
            Some("NOERROR") => stats.increment_info(InfoType::CnameAnswer),
            Some("NXDOMAIN" | "SERVFAIL" | "REFUSED" | STATUS_NO_SERVERS) => {
                stats.increment_info(InfoType::SuspiciousStatus)
            }
            _ => {}
        }
    }

}
