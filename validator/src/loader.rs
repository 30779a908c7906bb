//! Reads the input documents from disk.
//!
//! Each read is fail-fast: a missing file or malformed JSON aborts the run
//! with a [`LoadError`] naming the path.

use std::path::Path;

use baiv_tokens::TokenMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::LoadError;

/// The two documents a run inspects.
#[derive(Debug, Clone)]
pub struct Documents {
    /// JSON-LD token document.
    pub output: Value,
    /// Audit framework document.
    pub audit: Value,
}

/// Loads the token document and the audit document.
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered; the audit document is not
/// read if the token document fails.
pub fn load_documents(output: &Path, audit: &Path) -> Result<Documents, LoadError> {
    let output = load_json(output)?;
    let audit = load_json(audit)?;
    Ok(Documents { output, audit })
}

/// Loads a flat `{ key: value }` source token file in document order.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, is not JSON, or is
/// not an object of string values.
pub fn load_source_tokens(path: &Path) -> Result<TokenMap, LoadError> {
    load_json(path)
}

/// Reads `path` and deserializes it as JSON.
///
/// # Errors
///
/// Returns [`LoadError::Read`] or [`LoadError::Parse`].
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded");
    Ok(value)
}
