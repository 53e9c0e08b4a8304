use log::{debug, error, info, warn};

use crate::validation::{CheckOutcome, CheckResult};

use std::path::Path;

/// Initialize the logger with a level derived from the verbosity flags.
///
/// Warnings stay visible in normal runs; `quiet` silences everything and
/// `verbose` opens up debug output.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log file collection information
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, files: &[P]) {
    info!("Scanning {file_count} file(s)");
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log URL discovery information
pub fn log_url_discovery(unique_urls: usize, total_found: usize) {
    info!("Found {unique_urls} unique URLs (from {total_found} total)");
}

/// Log checking start
pub fn log_check_start(url_count: usize) {
    info!("Checking {url_count} URLs");
}

/// Log checking completion
pub fn log_check_complete(valid: usize, total: usize, duration_ms: u128) {
    let invalid = total - valid;
    if invalid == 0 {
        info!("Check complete: {valid}/{total} URLs valid ({duration_ms}ms)");
    } else {
        warn!("Check complete: {valid}/{total} URLs valid, {invalid} invalid ({duration_ms}ms)");
    }
}

/// Log an individual check result for debugging
pub fn log_check_result(result: &CheckResult) {
    match &result.outcome {
        CheckOutcome::Status(code) if result.is_valid() => {
            debug!("ok {} -> {code}", result.url)
        }
        CheckOutcome::Status(code) => debug!("invalid {} -> {code}", result.url),
        CheckOutcome::Transport(description) => {
            debug!("invalid {} -> {description}", result.url)
        }
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
