//! Error types for the import/export gateway
//!
//! - Import (file → Document)
//! - Export (Document → file)

use std::path::PathBuf;

/// Errors while importing a document
///
/// None of these touch the current document: import either yields a whole
/// new document or nothing.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Payload is not parseable JSON text
    #[error("error parsing JSON file: {message}")]
    Parse { message: String },

    /// JSON parsed but lacks the `valueStream.phases` shape
    #[error("invalid file format: {reason}")]
    Malformed { reason: String },

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    #[inline]
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Errors while exporting a document
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Serialization failed
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
