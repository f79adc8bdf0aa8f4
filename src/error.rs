// src/error.rs
// =============================================================================
// Typed errors for the harvesting pipeline.
//
// The CLI layer works with anyhow::Result, but the resolver, fetcher and
// filesystem helpers return these so callers (and tests) can tell a bad URL
// apart from a failed clone.
// =============================================================================

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the pipeline stages.
#[derive(Error, Debug)]
pub enum HarvestError {
    /// The URL could not be turned into an `owner-repo` identifier
    #[error("Invalid repository URL format: {url}")]
    InvalidReference { url: String },

    /// `git clone` could not be started or exited unsuccessfully
    #[error("Failed to clone repository {url}: {message}")]
    Fetch { url: String, message: String },

    /// A filesystem operation on a specific path failed
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarvestError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarvestError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
