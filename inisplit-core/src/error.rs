//! Load-time errors.
//!
//! Only loading a file can fail. Parsing never does: malformed lines are
//! dropped silently and lookups report absence as `None`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned by [`Ini::load`](crate::Ini::load).
///
/// No partially loaded buffer survives an error.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Opening, querying the size of, or reading the file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The buffer for the file content could not be allocated.
    #[error("cannot allocate {size} bytes for {}", .path.display())]
    Allocation { path: PathBuf, size: u64 },

    /// The file yielded fewer bytes than its reported size.
    #[error("short read on {}: expected {expected} bytes, got {actual}", .path.display())]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Read { path, .. }
            | LoadError::Allocation { path, .. }
            | LoadError::ShortRead { path, .. } => path,
        }
    }
}
