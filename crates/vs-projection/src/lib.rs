//! Value Stream Projections
//!
//! Read-only views derived from a document snapshot on every change:
//! - [`illustrate`]: left-to-right flow cards with input/output previews
//! - [`visualize`]: summary, timeline and stakeholder swim lanes
//! - [`DetailPanel`]: which phase the visualization details
//! - `render_*`: plain-text output for the terminal
//!
//! # Example
//!
//! ```rust,ignore
//! use vs_projection::{default_lanes, render_visualization, visualize};
//!
//! let viz = visualize(session.document(), &default_lanes(), session.focused());
//! println!("{}", render_visualization(&viz, None));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod illustration;
pub mod panel;
pub mod render;
pub mod visualization;

pub use illustration::{illustrate, FlowCard, Illustration, IoFilter, IoPreview, PreviewItem};
pub use panel::DetailPanel;
pub use render::{render_editor, render_illustration, render_phase_detail, render_visualization};
pub use visualization::{
    default_lanes, visualize, FocusBanner, LaneBox, LaneRow, Summary, SwimLane, TimelineSegment,
    Visualization,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
