//! Configuration management
//!
//! This module handles loading and merging scan settings from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, output_formats, timeouts};
use crate::core::error::{Result, UrlCheckError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory to scan
    pub path: Option<String>,

    /// Substrings that exclude a directory subtree when present in its path
    pub exclude: Option<Vec<String>>,

    /// File name suffixes to include
    pub file_types: Option<Vec<String>>,

    /// Timeout in seconds for HTTP requests
    pub timeout: Option<u64>,

    /// Number of concurrent requests during checking
    pub concurrency: Option<usize>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Exit non-zero when invalid URLs are found
    pub strict: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: Some(defaults::ROOT_PATH.to_string()),
            exclude: Some(defaults::EXCLUDED_SUBSTRINGS.map(String::from).to_vec()),
            file_types: Some(defaults::FILE_EXTENSIONS.map(String::from).to_vec()),
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            concurrency: None, // Will default to CPU core count
            user_agent: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            strict: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, validating the result
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlCheckError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrlCheckError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .urlcheck.toml in current directory
        if let Ok(config) = Self::load_from_file(".urlcheck.toml") {
            return config;
        }

        // Check for .urlcheck.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.urlcheck.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Scan selection
        if let Some(ref path) = cli_config.path {
            self.path = Some(path.clone());
        }
        if let Some(ref exclude) = cli_config.exclude {
            self.exclude = Some(exclude.clone());
        }
        if let Some(ref file_types) = cli_config.file_types {
            self.file_types = Some(file_types.clone());
        }

        // Checking
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }

        // Output & format
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.strict {
            self.strict = Some(true);
        }
    }

    /// Effective root path to scan
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or(defaults::ROOT_PATH))
    }

    /// Effective directory exclusion substrings
    pub fn excluded_substrings(&self) -> Vec<String> {
        self.exclude
            .clone()
            .unwrap_or_else(|| defaults::EXCLUDED_SUBSTRINGS.map(String::from).to_vec())
    }

    /// Effective file name suffixes
    pub fn file_extensions(&self) -> Vec<String> {
        self.file_types
            .clone()
            .unwrap_or_else(|| defaults::FILE_EXTENSIONS.map(String::from).to_vec())
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Effective checker concurrency, never zero
    pub fn concurrency_or_cores(&self) -> usize {
        self.concurrency.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(UrlCheckError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::REJECTED_TIMEOUT_SECONDS {
                return Err(UrlCheckError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(UrlCheckError::Config(
                    "Concurrency cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if concurrency > 1000 {
                return Err(UrlCheckError::Config(format!(
                    "Concurrency of {concurrency} is extremely high and may cause system instability. Consider using a smaller value."
                )));
            }
        }

        if let Some(ref format) = self.output_format {
            if !output_formats::ALL.contains(&format.as_str()) {
                return Err(UrlCheckError::Config(format!(
                    "Invalid output format '{format}'. Expected one of: {}.",
                    output_formats::ALL.join(", ")
                )));
            }
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Scan selection
    pub path: Option<String>,            // --path
    pub exclude: Option<Vec<String>>,    // --exclude
    pub file_types: Option<Vec<String>>, // --file-type

    // Checking
    pub timeout: Option<u64>,       // --timeout
    pub concurrency: Option<usize>, // --concurrency
    pub user_agent: Option<String>, // --user-agent

    // Output & verbosity
    pub output_format: Option<String>, // --format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub strict: bool,                  // --strict

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
