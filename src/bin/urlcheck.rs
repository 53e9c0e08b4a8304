use clap::Parser;

use urlcheck::config::{CliConfig, Config};
use urlcheck::core::constants::output_formats;
use urlcheck::discovery::{ExtractUrls, Extractor, collect_files};
use urlcheck::reporting::{logging, output};
use urlcheck::ui::{Cli, cli_to_config};
use urlcheck::validation::{CheckResult, CheckUrls, Checker};

use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_urlcheck_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main scan logic extracted from main() for testing
pub async fn run_urlcheck_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    let output_format = config
        .output_format
        .clone()
        .unwrap_or_else(|| output_formats::DEFAULT.to_string());
    let text_output = output_format == output_formats::TEXT;

    if text_output && !cli_config.quiet {
        output::display_config_info(&config);
    }

    // Stage 1: traversal & filter
    let excluded = config.excluded_substrings();
    let extensions = config.file_extensions();
    let files = collect_files(&config.root_path(), &excluded, &extensions)?;
    logging::log_file_info(files.len(), &files);

    // Stage 2: extraction
    let index = Extractor::default().extract_urls(&files);
    logging::log_url_discovery(index.len(), index.total_references());

    let metadata = output::ReportMetadata {
        files_scanned: files.len(),
        unique_urls: index.len(),
    };

    if text_output {
        output::display_unique_url_count(metadata.unique_urls);
    }

    // Stage 3: checking
    let entries = index.into_sorted_entries();
    logging::log_check_start(entries.len());
    let started = Instant::now();
    let results = Checker::default().check_urls(entries, &config).await?;

    let invalid: Vec<&CheckResult> = results.iter().filter(|result| result.is_invalid()).collect();
    logging::log_check_complete(
        results.len() - invalid.len(),
        results.len(),
        started.elapsed().as_millis(),
    );

    // Stage 4: reporting
    if text_output {
        output::display_invalid_results(&invalid);
    } else {
        output::display_json_report(&config, &metadata, &invalid);
    }

    Ok(determine_exit_code(invalid.len(), &config))
}

/// Load configuration from file or standard locations and merge with CLI flags
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence over file values
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// The scan is a reporting tool first: findings only affect the exit code
/// when strict mode asks them to.
fn determine_exit_code(invalid_count: usize, config: &Config) -> i32 {
    if config.strict.unwrap_or(false) && invalid_count > 0 {
        1
    } else {
        0
    }
}
