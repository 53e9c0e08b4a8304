use std::fmt;

/// Error types for urlcheck operations
#[derive(Debug)]
pub enum UrlCheckError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// File walking error
    FileWalking(ignore::Error),
}

impl fmt::Display for UrlCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlCheckError::Io(err) => write!(f, "IO error: {err}"),
            UrlCheckError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlCheckError::Http(err) => write!(f, "HTTP error: {err}"),
            UrlCheckError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for UrlCheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlCheckError::Io(err) => Some(err),
            UrlCheckError::Http(err) => Some(err),
            UrlCheckError::FileWalking(err) => Some(err),
            UrlCheckError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for UrlCheckError {
    fn from(err: std::io::Error) -> Self {
        UrlCheckError::Io(err)
    }
}

impl From<reqwest::Error> for UrlCheckError {
    fn from(err: reqwest::Error) -> Self {
        UrlCheckError::Http(err)
    }
}

impl From<ignore::Error> for UrlCheckError {
    fn from(err: ignore::Error) -> Self {
        UrlCheckError::FileWalking(err)
    }
}

/// Type alias for Results using UrlCheckError
pub type Result<T> = std::result::Result<T, UrlCheckError>;
