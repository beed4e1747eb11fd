//! Summary, timeline and stakeholder swim lanes
//!
//! Lanes are configured independently of the document. A lane names phase
//! ids; ids that do not exist in the current document are skipped, so a
//! lane configuration survives imports and deletions.

use serde::{Deserialize, Serialize};
use vs_model::{Document, Phase, PhaseId};

/// Timeline colours, cycled by position
pub const TIMELINE_PALETTE: [&str; 8] = [
    "#047857", "#059669", "#0d9488", "#10b981", "#14b8a6", "#34d399", "#6ee7b7", "#a7f3d0",
];

/// Position of the long build phase on the timeline
pub const WIDE_SEGMENT_INDEX: usize = 4;
pub const WIDE_SEGMENT_WEIGHT: f64 = 6.0;
pub const SEGMENT_WEIGHT: f64 = 1.5;

/// Outputs listed per lane box
pub const LANE_OUTPUT_LIMIT: usize = 3;
/// Characters kept of each listed output
pub const LANE_OUTPUT_CHARS: usize = 40;

pub const LEAD_TIME_TARGET: &str = "8-12 weeks";
pub const EFFICIENCY_TARGET: &str = "60-70%";

/// A stakeholder group and the phases it takes part in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwimLane {
    pub name: String,
    pub role: String,
    pub phases: Vec<PhaseId>,
}

impl SwimLane {
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>, phases: &[u64]) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            phases: phases.iter().copied().map(PhaseId).collect(),
        }
    }
}

/// The stock lane layout
#[must_use]
pub fn default_lanes() -> Vec<SwimLane> {
    vec![
        SwimLane::new("Operating Officer", "Strategic Oversight", &[1, 3, 8]),
        SwimLane::new("Product Owner", "Requirements & Value", &[1, 5, 8]),
        SwimLane::new("PMO / TPM", "Program Management", &[2, 5, 8]),
        SwimLane::new("Architecture Team", "Technical Design", &[3, 5]),
        SwimLane::new("Development Team", "Implementation", &[4, 5, 7]),
        SwimLane::new("Rollout / Ops Team", "Deployment & Operations", &[6, 7]),
        SwimLane::new("Customer / Users", "Feedback & Adoption", &[1, 5, 8]),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub lead_time_target: &'static str,
    pub efficiency_target: &'static str,
    pub phase_count: usize,
    pub stakeholder_groups: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSegment {
    pub id: PhaseId,
    /// `P<id>`
    pub label: String,
    /// `Phase <id>: <name>`
    pub title: String,
    pub weight: f64,
    pub color: &'static str,
}

/// A phase as it appears inside a lane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneBox {
    pub id: PhaseId,
    pub name: String,
    pub duration: String,
    pub outputs: Vec<String>,
    pub value_add_time: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneRow {
    pub name: String,
    pub role: String,
    pub boxes: Vec<LaneBox>,
}

/// Shown while a phase is focused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusBanner {
    pub id: PhaseId,
    /// `None` if the focused id no longer names a phase
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Visualization {
    pub summary: Summary,
    pub timeline: Vec<TimelineSegment>,
    pub lanes: Vec<LaneRow>,
    pub banner: Option<FocusBanner>,
}

/// Project the document through the lane layout
#[must_use]
pub fn visualize(document: &Document, lanes: &[SwimLane], focused: Option<PhaseId>) -> Visualization {
    let timeline = document
        .phases
        .iter()
        .enumerate()
        .map(|(index, phase)| TimelineSegment {
            id: phase.id,
            label: format!("P{}", phase.id),
            title: format!("Phase {}: {}", phase.id, phase.name),
            weight: segment_weight(index),
            color: TIMELINE_PALETTE[index % TIMELINE_PALETTE.len()],
        })
        .collect();

    let lanes_out = lanes
        .iter()
        .map(|lane| LaneRow {
            name: lane.name.clone(),
            role: lane.role.clone(),
            boxes: lane
                .phases
                .iter()
                .filter_map(|id| document.phase(*id))
                .map(|phase| lane_box(phase, focused))
                .collect(),
        })
        .collect();

    let banner = focused.map(|id| FocusBanner {
        id,
        name: document.phase(id).map(|p| p.name.clone()),
    });

    tracing::trace!(
        phases = document.len(),
        lanes = lanes.len(),
        focused = ?focused,
        "visualization projected"
    );
    Visualization {
        summary: Summary {
            lead_time_target: LEAD_TIME_TARGET,
            efficiency_target: EFFICIENCY_TARGET,
            phase_count: document.len(),
            stakeholder_groups: lanes.len(),
        },
        timeline,
        lanes: lanes_out,
        banner,
    }
}

#[must_use]
pub fn segment_weight(index: usize) -> f64 {
    if index == WIDE_SEGMENT_INDEX {
        WIDE_SEGMENT_WEIGHT
    } else {
        SEGMENT_WEIGHT
    }
}

fn lane_box(phase: &Phase, focused: Option<PhaseId>) -> LaneBox {
    LaneBox {
        id: phase.id,
        name: phase.name.clone(),
        duration: phase.metadata.duration.clone(),
        outputs: phase
            .outputs
            .iter()
            .take(LANE_OUTPUT_LIMIT)
            .map(|o| truncate(&o.output, LANE_OUTPUT_CHARS))
            .collect(),
        value_add_time: phase.metadata.value_add_time.clone(),
        focused: focused == Some(phase.id),
    }
}

/// First `max` characters, with "..." appended when anything was cut
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
