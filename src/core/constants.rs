/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values used across the application,
/// making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - plain report lines on standard output
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// HTTP constants
pub mod http {
    /// HTTP 200 OK - the only status counted as valid
    pub const STATUS_OK: u16 = 200;
    /// Redirect hops followed before a request is abandoned
    pub const MAX_REDIRECTS: usize = 10;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
    /// Timeouts above this draw a warning (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Timeouts above this are rejected outright (24 hours)
    pub const REJECTED_TIMEOUT_SECONDS: u64 = 86_400;
}

/// Default scan selection values
pub mod defaults {
    /// Root directory scanned when no path is given
    pub const ROOT_PATH: &str = "./";
    /// Directory path substrings excluded from the walk
    pub const EXCLUDED_SUBSTRINGS: [&str; 2] = [".git", "vendor"];
    /// File name suffixes included in the scan
    pub const FILE_EXTENSIONS: [&str; 2] = [".md", ".rst"];
}
