//! File-based Input Adapter
//!
//! Reads member, site and offer documents from disk. Files ending in
//! `.yaml`/`.yml` are parsed as YAML, everything else as JSON.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading an input document
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Serialization format of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

/// Read and deserialize a document
///
/// # Example
/// ```ignore
/// let site: Site = read_document("fixtures/site.json")?;
/// ```
pub fn read_document<T, P>(path: P) -> Result<T, InputError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Read input document");

    match DocumentFormat::from_path(path) {
        DocumentFormat::Json => serde_json::from_str(&contents).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        }),
        DocumentFormat::Yaml => serde_yaml::from_str(&contents).map_err(|source| InputError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}
