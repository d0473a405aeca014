//! File-backed catalog source.

use crate::model::SourceError;
use std::path::Path;

/// Read the whole catalog file into memory.
///
/// # Errors
///
/// Returns `SourceError::FileNotFound` if the file does not exist.
/// Returns `SourceError::Io` for other I/O errors.
pub fn read_catalog_file(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let body = std::fs::read_to_string(path)?;
    Ok(body)
}
