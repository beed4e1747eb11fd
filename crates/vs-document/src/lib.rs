//! Value Stream Document Controller
//!
//! Holds the only authoritative copy of the value stream and exposes the
//! reducer-style operation set every editor writes through:
//! - [`DocumentController::update_phase`]
//! - [`DocumentController::add_phase`]
//! - [`DocumentController::delete_phase`]
//! - [`DocumentController::replace`] (wholesale import)
//!
//! # Example
//!
//! ```rust,ignore
//! use vs_document::DocumentController;
//!
//! let mut ctl = DocumentController::new(initial)?;
//! let id = ctl.add_phase()?;
//! let outcome = ctl.delete_phase(id, &mut |_phase: &Phase| true)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod controller;
mod error;

pub use controller::{
    check_invariants, ConfirmDelete, DeleteOutcome, DocumentController, DEFAULT_PHASE_NAME,
};
pub use error::DocumentError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
