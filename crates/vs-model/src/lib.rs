//! Value Stream Model
//!
//! Typed document model for a value stream: a named, ordered sequence of
//! phases, each carrying metadata and four record tables.
//!
//! # Core Concepts
//!
//! - [`Document`]: The whole value stream (name, description, phases)
//! - [`Phase`]: One stage, identified by an immutable [`PhaseId`]
//! - [`Metadata`]: Scalar phase facts plus the stakeholder list
//! - [`Record`]: Field-schema trait shared by all record types
//!
//! # Example
//!
//! ```rust
//! use vs_model::{Document, Phase, PhaseId};
//!
//! let doc = Document::new("Delivery", "", vec![Phase::new(PhaseId(1), "Discovery")]);
//! assert_eq!(doc.phase(PhaseId(1)).map(|p| p.name.as_str()), Some("Discovery"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod phase;
mod record;

pub use phase::{
    Document, Metadata, MetadataField, ParseKeyError, Phase, PhaseId, PhaseSection,
};
pub use record::{CriteriaItem, FieldSpec, InputItem, MetricItem, OutputItem, Record};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
