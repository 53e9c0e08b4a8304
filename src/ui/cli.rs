// Command-line interface definitions and parsing for urlcheck

use clap::Parser;

use crate::config::CliConfig;
use crate::core::constants::{output_formats, timeouts};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Scan Selection
    /// Root directory to scan (default: ./)
    #[arg(short = 'p', long, value_name = "PATH", help_heading = "Scan Selection")]
    pub path: Option<String>,

    /// Substrings that exclude a directory subtree, comma-separated (default: .git,vendor)
    #[arg(
        short = 'e',
        long,
        value_name = "SUBSTRINGS",
        help_heading = "Scan Selection"
    )]
    pub exclude: Option<String>,

    /// File name suffixes to include, comma-separated (default: .md,.rst)
    #[arg(
        short = 't',
        long = "file-type",
        alias = "fyle_type",
        value_name = "SUFFIXES",
        help_heading = "Scan Selection"
    )]
    pub file_type: Option<String>,

    // Checking
    /// Connection timeout in seconds (default: 5)
    #[arg(long, value_name = "SECONDS", help_heading = "Checking")]
    pub timeout: Option<u64>,

    /// Concurrent requests (default: CPU cores)
    #[arg(long, value_name = "COUNT", help_heading = "Checking")]
    pub concurrency: Option<usize>,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Checking")]
    pub user_agent: Option<String>,

    // Output & Verbosity
    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Exit with a non-zero code when invalid URLs are found
    #[arg(long, help_heading = "Output & Verbosity")]
    pub strict: bool,

    /// Suppress configuration echo and logging
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Translate parsed CLI arguments into CliConfig for the config merge
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig::default();

    // Scan selection
    if let Some(ref path) = cli.path {
        cli_config.path = Some(path.clone());
    }
    if let Some(ref exclude) = cli.exclude {
        cli_config.exclude = Some(split_list(exclude));
    }
    if let Some(ref file_type) = cli.file_type {
        cli_config.file_types = Some(split_list(file_type));
    }

    // Checking
    if let Some(timeout) = cli.timeout {
        if timeout == 0 {
            eprintln!(
                "Error: Timeout cannot be 0. Expected a positive integer representing seconds."
            );
            std::process::exit(1);
        }
        if timeout > timeouts::MAX_TIMEOUT_SECONDS {
            eprintln!(
                "Warning: Timeout of {timeout} seconds is quite large. Consider using a smaller value."
            );
        }
        cli_config.timeout = Some(timeout);
    }
    if let Some(concurrency) = cli.concurrency {
        if concurrency == 0 {
            eprintln!("Error: Concurrency cannot be 0. Expected a positive integer.");
            std::process::exit(1);
        }
        cli_config.concurrency = Some(concurrency);
    }
    if let Some(ref user_agent) = cli.user_agent {
        cli_config.user_agent = Some(user_agent.clone());
    }

    // Output & verbosity
    if let Some(ref format) = cli.format {
        cli_config.output_format = Some(format.clone());
    }
    cli_config.strict = cli.strict;
    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose;

    // Configuration
    if let Some(ref config) = cli.config {
        cli_config.config_file = Some(config.clone());
    }
    cli_config.no_config = cli.no_config;

    cli_config
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                None
            } else {
                Some(part.to_string())
            }
        })
        .collect()
}
