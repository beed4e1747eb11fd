//! Import: bytes → validated document
//!
//! Explicit parse steps, each with its own failure:
//! 1. UTF-8 JSON text ([`ImportError::Parse`])
//! 2. `valueStream` object holding a `phases` array ([`ImportError::Malformed`])
//! 3. Typed decode of the payload ([`ImportError::Malformed`])
//! 4. Document invariants: non-empty, unique ids ([`ImportError::Malformed`])

use crate::error::ImportError;
use crate::payload::Payload;
use serde_json::Value;
use std::path::Path;
use vs_document::check_invariants;
use vs_model::Document;

/// Parse and validate an import payload
///
/// # Errors
/// See the module docs for the failure of each step
pub fn parse_import(bytes: &[u8]) -> Result<Document, ImportError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ImportError::parse(e.to_string()))?;
    let value: Value = serde_json::from_str(text).map_err(|e| ImportError::parse(e.to_string()))?;

    check_shape(&value)?;

    let payload: Payload = serde_json::from_value(value)
        .map_err(|e| ImportError::malformed(format!("unexpected phase shape: {e}")))?;

    check_invariants(&payload.value_stream).map_err(|e| ImportError::malformed(e.to_string()))?;

    tracing::debug!(
        name = %payload.value_stream.name,
        phases = payload.value_stream.len(),
        "import payload accepted"
    );
    Ok(payload.value_stream)
}

/// Read a user-selected file and parse it
///
/// # Errors
/// Returns [`ImportError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_import`]
pub async fn read_import(path: impl AsRef<Path>) -> Result<Document, ImportError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_import(&bytes).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "import rejected");
        e
    })
}

/// The document shipped with the application
///
/// # Errors
/// Returns error only if the bundled payload itself is invalid
pub fn bundled_document() -> Result<Document, ImportError> {
    parse_import(BUNDLED.as_bytes())
}

const BUNDLED: &str = include_str!("../data/value-stream-data.json");

fn check_shape(value: &Value) -> Result<(), ImportError> {
    let Some(stream) = value.get("valueStream").filter(|v| v.is_object()) else {
        return Err(ImportError::malformed("missing valueStream object"));
    };
    match stream.get("phases") {
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(ImportError::malformed("valueStream.phases is not a list")),
        None => Err(ImportError::malformed("missing valueStream.phases")),
    }
}
