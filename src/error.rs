//! Error types for iprange.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for range ingestion.
///
/// Only the reading side can fail. A line that is not a valid CIDR block
/// is skipped during ingestion, and searching never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// The range file could not be opened
    #[error("failed to open range file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while reading range data
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for iprange operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_open_error_names_path() {
        let err = Error::Open {
            path: PathBuf::from("/no/such/ranges.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/ranges.txt"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_io_error_from() {
        let err: Error = io::Error::new(io::ErrorKind::InvalidData, "bad utf-8").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
