//! Exchange format: `{ "valueStream": Document }`

use serde::{Deserialize, Serialize};
use vs_model::Document;

/// Borrowed payload for serialization
#[derive(Debug, Serialize)]
pub(crate) struct PayloadRef<'a> {
    #[serde(rename = "valueStream")]
    pub(crate) value_stream: &'a Document,
}

/// Owned payload for deserialization
#[derive(Debug, Deserialize)]
pub(crate) struct Payload {
    #[serde(rename = "valueStream")]
    pub(crate) value_stream: Document,
}
