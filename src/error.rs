//! Error types for filekv
//!
//! Provides a unified error type for all store operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Boxed error returned by user-supplied hooks
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Where an I/O failure happened.
///
/// Lets callers tell a failed directory probe apart from a failed write
/// without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoSite {
    /// Checking whether the store directory exists
    ProbeDirectory,
    /// Creating the store directory
    CreateDirectory,
    /// Writing a value file
    Write,
    /// Reading a value file
    Read,
    /// Deleting a value file
    Remove,
    /// Listing the directory during restore
    List,
}

impl fmt::Display for IoSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IoSite::ProbeDirectory => "directory probe",
            IoSite::CreateDirectory => "directory creation",
            IoSite::Write => "write",
            IoSite::Read => "read",
            IoSite::Remove => "remove",
            IoSite::List => "directory listing",
        };
        f.write_str(name)
    }
}

/// Unified error type for filekv operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Construction Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    InvalidKey(String),

    // -------------------------------------------------------------------------
    // Hook / Serialization Errors
    // -------------------------------------------------------------------------
    #[error("An error occurred in the serialize hook function.")]
    SerializeHook(#[source] BoxError),

    #[error("An error occurred in the de-serialize hook function.")]
    DeserializeHook(#[source] BoxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error during {site} of {}: {source}", .path.display())]
    Io {
        site: IoSite,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Tag an I/O error with the site and path it came from
    pub(crate) fn io(site: IoSite, path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            site,
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error, if this is an I/O failure
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The failure site, if this is an I/O failure
    pub fn io_site(&self) -> Option<IoSite> {
        match self {
            StoreError::Io { site, .. } => Some(*site),
            _ => None,
        }
    }

    /// True for key validation failures (reported before any I/O)
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, StoreError::InvalidKey(_))
    }
}
