//! Export: document → downloadable JSON file

use crate::error::ExportError;
use crate::payload::PayloadRef;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use vs_model::Document;

/// Prefix of every exported file name
pub const FILE_PREFIX: &str = "value-stream-data";

/// `value-stream-data-<YYYY-MM-DD>.json`
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{FILE_PREFIX}-{}.json", date.format("%Y-%m-%d"))
}

/// Serialized document ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// UTF-8 text of the payload
    #[must_use]
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Write into `dir` under [`Self::file_name`]
    ///
    /// # Errors
    /// Returns error if the directory is missing or not writable
    pub async fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = dir.as_ref().join(&self.file_name);
        tokio::fs::write(&path, &self.bytes)
            .await
            .map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "document exported");
        Ok(path)
    }
}

/// Serialize `document` as pretty-printed `{ "valueStream": ... }`
///
/// # Errors
/// Returns error if serialization fails
pub fn export(document: &Document, date: NaiveDate) -> Result<ExportArtifact, ExportError> {
    let bytes = serde_json::to_vec_pretty(&PayloadRef {
        value_stream: document,
    })?;
    Ok(ExportArtifact {
        file_name: export_file_name(date),
        bytes,
    })
}

/// [`export`] stamped with today's UTC date
///
/// # Errors
/// Returns error if serialization fails
pub fn export_today(document: &Document) -> Result<ExportArtifact, ExportError> {
    export(document, chrono::Utc::now().date_naive())
}
