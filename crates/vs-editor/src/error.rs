//! Error types for editor operations
//!
//! Covers:
//! - Table addressing errors (row out of range, unknown field)
//! - Session-level failures wrapping document errors

use vs_document::DocumentError;
use vs_model::PhaseId;

/// Record table addressing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Row index past the end of the table
    #[error("row {row} out of range (table has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// Key not in the record schema
    #[error("unknown field: '{0}'")]
    UnknownField(String),

    /// No cell is in edit mode
    #[error("no cell is being edited")]
    NotEditing,
}

/// Session errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Document controller refused the operation
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Table edit could not be addressed
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Phase id not present in the document
    #[error("unknown phase: {0}")]
    UnknownPhase(PhaseId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_error_display() {
        let err = TableError::RowOutOfRange { row: 4, len: 2 };
        assert_eq!(err.to_string(), "row 4 out of range (table has 2 rows)");
    }

    #[test]
    fn session_error_conversions() {
        let err: SessionError = DocumentError::LastPhase { id: PhaseId(1) }.into();
        assert!(matches!(err, SessionError::Document(DocumentError::LastPhase { .. })));

        let err: SessionError = TableError::NotEditing.into();
        assert!(err.to_string().contains("no cell"));
    }
}
