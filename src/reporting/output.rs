//! Output formatting and display logic for urlcheck

use serde_json::json;

use crate::config::Config;
use crate::validation::{CheckOutcome, CheckResult};

/// Counters carried into the final report.
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    pub files_scanned: usize,
    pub unique_urls: usize,
}

/// Echo the effective scan configuration.
pub fn display_config_info(config: &Config) {
    println!("Path to check: {}", config.root_path().display());
    println!(
        "Path to exclude: {}",
        config.excluded_substrings().join(", ")
    );
    println!(
        "File types to look for: {}",
        config.file_extensions().join(", ")
    );
}

/// Announce how many unique URLs the extractor produced.
pub fn display_unique_url_count(count: usize) {
    println!("Number of unique URLs to check: {count}");
}

/// Print one line per invalid URL followed by the invalid count.
///
/// Each line carries the URL and the space-joined referencing files, the
/// input order is preserved.
pub fn display_invalid_results(invalid: &[&CheckResult]) {
    for result in invalid {
        println!("{result}");
    }
    println!("Number of invalid URLs: {}", invalid.len());
}

/// Render the whole report as one JSON document on standard output.
pub fn display_json_report(config: &Config, metadata: &ReportMetadata, invalid: &[&CheckResult]) {
    println!("{}", build_json_report(config, metadata, invalid));
}

fn build_json_report(
    config: &Config,
    metadata: &ReportMetadata,
    invalid: &[&CheckResult],
) -> String {
    let invalid_entries: Vec<serde_json::Value> = invalid
        .iter()
        .map(|result| {
            let (status, reason) = match &result.outcome {
                CheckOutcome::Status(code) => (json!(code), json!(null)),
                CheckOutcome::Transport(description) => (json!(null), json!(description)),
            };
            json!({
                "url": result.url,
                "status": status,
                "reason": reason,
                "files": result.files,
            })
        })
        .collect();

    let report = json!({
        "path": config.root_path().display().to_string(),
        "exclude": config.excluded_substrings(),
        "file_types": config.file_extensions(),
        "files_scanned": metadata.files_scanned,
        "unique_urls": metadata.unique_urls,
        "invalid": invalid_entries,
        "invalid_count": invalid.len(),
    });

    serde_json::to_string_pretty(&report).expect("report serialization cannot fail")
}
