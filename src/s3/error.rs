use std::path::PathBuf;
use thiserror::Error;

/// Boxed backend error carried by [`Error::Upload`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort an obfuscated upload run
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing or empty
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Directory enumeration failed mid-walk
    #[error("Failed to walk directory: {0}")]
    Traversal(#[from] walkdir::Error),

    /// Local file could not be opened for reading
    #[error("Cannot access file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Storage backend rejected or could not complete the transfer
    #[error("Failed to upload '{key}': {source}")]
    Upload {
        key: String,
        #[source]
        source: BoxError,
    },

    /// Walked path has no usable file name or lies outside the root
    #[error("Invalid path: {}", path.display())]
    InvalidPath { path: PathBuf },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn upload(key: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Upload {
            key: key.into(),
            source: source.into(),
        }
    }
}

/// Result type for obfuscated upload operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_access_message_names_path() {
        let err = Error::file_access(
            "/data/secret/plan.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/data/secret/plan.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_upload_wraps_backend_error() {
        let err = Error::upload("abc/report.txt", "AccessDenied: invalid credentials");
        assert_eq!(
            err.to_string(),
            "Failed to upload 'abc/report.txt': AccessDenied: invalid credentials"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
