use std::path::PathBuf;

use thiserror::Error;

/// Fatal start-up failures. Everything past loading degrades to `Unknown`
/// instead of erroring.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read license registry {path}: {source}")]
    RegistryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse license registry {path}: {source}")]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Transport-level failure reported by a [`Fetcher`](crate::pipeline::fetch::Fetcher).
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },
}

/// Failure reported by a [`LicenseStore`](crate::pipeline::store::LicenseStore).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record not found: {0}")]
    NotFound(String),
}
