//! Error types for the hrtchart_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for hrtchart_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Start-day string did not parse as a date
    #[error("Invalid start day format: {0}")]
    Date(#[from] chrono::ParseError),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Spreadsheet write or save failure
    #[error("Spreadsheet error: {0}")]
    Sheet(#[from] rust_xlsxwriter::XlsxError),

    /// Document write or save failure
    #[error("Document error: {0}")]
    Doc(String),

    /// Saved document failed the post-write integrity check
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Credential loading or SMTP failure
    #[error("Mail error: {0}")]
    Mail(String),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
