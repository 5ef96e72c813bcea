//! Error types for pubtex.
//!
//! Uses `thiserror` for structured error handling. Every variant carries the
//! path that failed so the CLI can report it without extra context.

use std::io;
use std::path::{Path, PathBuf};

/// Errors from loading records or writing the LaTeX document.
#[derive(thiserror::Error, Debug)]
pub enum PubsError {
    /// The input document could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The input document is not a JSON array of objects.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Input path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The output document could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl PubsError {
    /// Create a read error.
    #[must_use]
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a write error.
    #[must_use]
    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true if the failure happened before any output was touched.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }

    /// The path involved in the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Result type alias for pubtex operations.
pub type Result<T> = std::result::Result<T, PubsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors() {
        let not_found = io::Error::from(io::ErrorKind::NotFound);
        let err = PubsError::read("pubs.json", not_found);
        assert!(err.is_input_error());

        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        assert!(PubsError::parse("pubs.json", json_err).is_input_error());

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let err = PubsError::write("pubs.tex", denied);
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_message_names_path() {
        let not_found = io::Error::from(io::ErrorKind::NotFound);
        let err = PubsError::write("out/pubs.tex", not_found);
        assert!(err.to_string().contains("out/pubs.tex"));
        assert_eq!(err.path(), Path::new("out/pubs.tex"));
    }
}
