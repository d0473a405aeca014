//! Catalog sources.
//!
//! The catalog is a static resource reached by a fixed location:
//! - a local file (the default, `db.json`)
//! - an `http://` / `https://` URL
//!
//! [`CatalogLoader`] runs one fetch on a background thread and hands back
//! the outcome exactly once.

use crate::model::{Catalog, LoadError, SourceError};
use crate::parser;
use std::fmt;
use std::path::PathBuf;

pub mod file;
pub mod http;
pub mod loader;

pub use loader::CatalogLoader;

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG: &str = "db.json";

/// Where the catalog document lives.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Local file.
    File(PathBuf),
    /// Remote document fetched with a GET request.
    Http(String),
}

impl CatalogSource {
    /// Interpret a location string.
    ///
    /// Strings starting with `http://` or `https://` are URLs; anything else
    /// is a file path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            CatalogSource::Http(location.to_string())
        } else {
            CatalogSource::File(PathBuf::from(location))
        }
    }

    /// Fetch the raw document body.
    ///
    /// Blocking. Call from a worker thread (see [`CatalogLoader`]) or from a
    /// non-interactive path.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` for missing files, I/O failures, transport
    /// failures and non-success HTTP statuses.
    pub fn fetch(&self) -> Result<String, SourceError> {
        match self {
            CatalogSource::File(path) => file::read_catalog_file(path),
            CatalogSource::Http(url) => http::fetch_catalog_url(url),
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::File(PathBuf::from(DEFAULT_CATALOG))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Http(url) => write!(f, "{}", url),
        }
    }
}

/// Fetch and parse a catalog in one blocking step.
///
/// # Errors
///
/// Returns `LoadError` wrapping either the fetch or the parse failure.
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog, LoadError> {
    let body = source.fetch()?;
    let catalog = parser::parse_catalog(&body)?;
    Ok(catalog)
}
