//! Value Stream Import/Export Gateway
//!
//! Converts between the in-memory [`Document`](vs_model::Document) and its
//! JSON exchange form `{ "valueStream": { name, description, phases } }`.
//!
//! - [`export`]: pretty-printed payload plus dated file name
//! - [`parse_import`]: staged validation; never yields a partial document
//! - [`read_import`] / [`ExportArtifact::write_to`]: async file IO
//! - [`bundled_document`]: the initial document shipped with the tool
//!
//! # Example
//!
//! ```rust,ignore
//! use vs_gateway::{export_today, parse_import};
//!
//! let artifact = export_today(session.document())?;
//! let restored = parse_import(&artifact.bytes)?;
//! assert_eq!(&restored, session.document());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod export;
mod import;
mod payload;

pub use error::{ExportError, ImportError};
pub use export::{export, export_file_name, export_today, ExportArtifact, FILE_PREFIX};
pub use import::{bundled_document, parse_import, read_import};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
