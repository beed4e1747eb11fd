//! Value Stream Editors
//!
//! Edit surfaces over the single controlled document:
//! - [`RecordTableEditor`]: generic editor over a list of uniform records
//! - [`MetadataEditor`]: scalar fields and the stakeholder tag list
//! - [`PhaseEditor`]: composes the above for one phase, owns title rename
//! - [`ViewCoordinator`]: active view and cross-view focus
//! - [`Session`]: application root writing every reported edit through the
//!   document controller
//!
//! Editors never mutate the document. They keep local draft state, report
//! full updated values, and reset drafts when bound to a different phase.
//!
//! # Example
//!
//! ```rust,ignore
//! use vs_editor::{PhaseEdit, Session, TitleOp};
//!
//! let mut session = Session::new(document)?;
//! session.apply_edit(PhaseEdit::Title(TitleOp::Begin))?;
//! session.apply_edit(PhaseEdit::Title(TitleOp::SetDraft("Discovery".into())))?;
//! session.apply_edit(PhaseEdit::Title(TitleOp::Commit))?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod draft;
pub mod error;
pub mod metadata;
pub mod phase;
pub mod session;
pub mod table;
pub mod view;

pub use draft::TextDraft;
pub use error::{SessionError, TableError};
pub use metadata::{MetadataEditor, MetadataOp};
pub use phase::{PhaseEdit, PhaseEditor, TitleOp};
pub use session::Session;
pub use table::{CellRef, CellView, RecordTableEditor, TableGrid, TableOp, PLACEHOLDER};
pub use view::{Activation, View, ViewCoordinator};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a session
    pub use crate::{
        Activation, MetadataOp, PhaseEdit, Session, SessionError, TableOp, TitleOp, View,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
