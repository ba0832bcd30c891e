//! Error types for the gridsift core.
//!
//! This module defines the centralized error type [`GridsiftError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The taxonomy is deliberately narrow: filtering itself is pure computation and
//! never fails. An empty term, a term that matches zero rows, or a non-matching
//! term are all normal, successful outcomes. Errors only arise at the boundaries,
//! when external input (a column label, a dataset file, a configuration file)
//! turns out to be malformed.

use thiserror::Error;

/// The main error type for gridsift operations.
///
/// This enum consolidates all error conditions that can occur at the crate's
/// boundaries, from column-label parsing to dataset loading and configuration
/// issues. I/O and JSON variants wrap underlying errors from external crates
/// using `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use gridsift::domain::{Column, GridsiftError};
///
/// let err = "Surname".parse::<Column>().unwrap_err();
/// assert!(matches!(err, GridsiftError::InvalidColumn { .. }));
/// ```
#[derive(Debug, Error)]
pub enum GridsiftError {
    /// A column selector referenced a value outside the four enumerated columns.
    ///
    /// Raised when parsing a column label that is not one of `Id`, `Name`,
    /// `Email`, or `City`. A column-select transition carrying such a label is
    /// rejected and leaves the filter state unchanged; the condition is
    /// surfaced to the caller rather than silently defaulting.
    #[error("invalid column: {value:?} is not one of Id, Name, Email, City")]
    InvalidColumn {
        /// The offending label as received from the caller.
        value: String,
    },

    /// Dataset parsing failed.
    ///
    /// Occurs when the session dataset cannot be deserialized from JSON.
    /// Automatically converts from `serde_json::Error` using `#[from]`.
    #[error("dataset parse error: {0}")]
    Source(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations while reading a
    /// dataset or configuration file. Automatically converts from
    /// `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or malformed.
    ///
    /// Occurs when the TOML configuration cannot be parsed or names an
    /// unknown column. The string describes the specific problem.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for gridsift operations.
///
/// This is a type alias for `std::result::Result<T, GridsiftError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, GridsiftError>;
