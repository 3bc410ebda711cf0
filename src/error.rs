//! Error types for Sales-Report

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Sales-Report error types
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite store error
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Chart rendering error (plotters backend errors are stringified;
    /// they borrow the drawing area and cannot cross the `?` boundary)
    #[error("chart error: {0}")]
    Chart(String),

    /// Column lookup or type coercion failure in a result frame
    #[error("frame error: {0}")]
    Frame(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
