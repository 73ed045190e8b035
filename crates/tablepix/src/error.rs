//! Error types for table rendering.
//!
//! This module provides [`Error`], the single error type returned by all public
//! operations. It abstracts over the underlying template engine's errors so the
//! public API stays stable.

use thiserror::Error;

/// Opaque error produced by a rendering backend.
///
/// Backends are external collaborators; their failures travel through the core
/// unchanged, boxed so any backend implementation can participate.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for all table rendering operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input table has zero rows or zero columns.
    #[error("table has no rows or no columns")]
    EmptyInput,

    /// A column (or the row-label index) does not match the table's row count.
    #[error("column '{column}' has {len} rows, expected {expected}")]
    Ragged {
        /// Name of the offending column, or `<index>` for the row labels.
        column: String,
        /// Actual length of the column.
        len: usize,
        /// Expected row count (taken from the first column).
        expected: usize,
    },

    /// A requested theme name is not in the built-in theme set.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// A requested output image format is outside the supported set.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Markup template compilation or rendering failure.
    #[error("markup template error: {0}")]
    Template(String),

    /// A style bundle could not be parsed.
    #[error("style error: {0}")]
    Style(String),

    /// I/O error (e.g. writing a markup document to disk).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendering backend failed. Wrapped with the stage that failed;
    /// the core never retries.
    #[error("rendering backend failed during {stage}: {source}")]
    Backend {
        /// Pipeline stage that invoked the backend.
        stage: &'static str,
        /// The backend's own error, unmasked.
        #[source]
        source: BackendError,
    },
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::Template(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Style(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownTheme("neon".to_string());
        assert!(err.to_string().contains("unknown theme"));
        assert!(err.to_string().contains("neon"));
    }

    #[test]
    fn test_backend_error_preserves_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "browser crashed");
        let err = Error::Backend {
            stage: "capture",
            source: Box::new(inner),
        };
        assert!(err.to_string().contains("capture"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_minijinja_error() {
        let mj = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "bad template");
        let err: Error = mj.into();
        assert!(matches!(err, Error::Template(_)));
    }
}
