//! Error types for skyfare.
//!
//! A small hierarchy built with `thiserror`, composing through `From` so the
//! `?` operator carries context up the stack.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the headless report path
//!   - [`LoadError`] - The one user-visible failure: the catalog could not be loaded
//!     - [`SourceError`] - Fetching the raw document (file, HTTP)
//!     - [`ParseError`] - The document is not a ticket catalog
//!   - `std::io::Error` - Terminal / stdout failures
//!
//! # Recovery Strategy
//!
//! There is none beyond reporting. A failed load is terminal for the current
//! activation; the TUI shows a generic message and the detail only reaches
//! the log file. Individual malformed tickets are not errors at this level,
//! see [`crate::model::MalformedTicket`].

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The catalog could not be loaded.
    #[error("Failed to load ticket catalog: {0}")]
    Load(#[from] LoadError),

    /// Writing to the terminal or stdout failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The JSON report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Failure to load the ticket catalog.
///
/// Collapses every way the single fetch can go wrong into one outcome. The
/// shell only distinguishes "loaded" from "failed"; the variants exist for
/// logging.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The raw document could not be fetched.
    #[error("{0}")]
    Source(#[from] SourceError),

    /// The document was fetched but is not a ticket catalog.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// The fetch worker went away without reporting an outcome.
    #[error("Catalog fetch was interrupted before completing")]
    Interrupted,
}

/// Errors fetching the raw catalog document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The catalog file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use skyfare::model::SourceError;
    ///
    /// let err = SourceError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing-db.json"),
    /// };
    /// assert!(err.to_string().contains("/tmp/missing-db.json"));
    /// ```
    #[error("Catalog file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Reading the catalog file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be completed (DNS, connect, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
    },
}

/// Errors turning a fetched document into a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The body is not JSON.
    #[error("Catalog is not valid JSON: {message}")]
    InvalidJson {
        /// serde_json error text.
        message: String,
    },

    /// The JSON has no top-level `tickets` array.
    #[error("Catalog has no top-level \"tickets\" array")]
    MissingTickets,
}
