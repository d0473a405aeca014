//! HTTP-backed catalog source.
//!
//! A single GET with the blocking client. No retry and no explicit timeout:
//! whatever the transport reports is the outcome.

use crate::model::SourceError;
use tracing::debug;

/// GET the catalog document.
///
/// # Errors
///
/// Returns `SourceError::Http` for transport failures and
/// `SourceError::Status` for non-2xx responses.
pub fn fetch_catalog_url(url: &str) -> Result<String, SourceError> {
    debug!(url, "Fetching catalog over HTTP");

    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text()?;
    Ok(body)
}
