//! Left-to-right flow of phases with input/output previews

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use vs_model::{Document, ParseKeyError, Phase, PhaseId};

/// Items listed per preview before the "+N more" overflow
pub const PREVIEW_LIMIT: usize = 3;

/// Which side of each phase the flow shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IoFilter {
    Inputs,
    Outputs,
    #[default]
    Both,
}

impl IoFilter {
    #[inline]
    #[must_use]
    pub fn shows_inputs(self) -> bool {
        matches!(self, IoFilter::Inputs | IoFilter::Both)
    }

    #[inline]
    #[must_use]
    pub fn shows_outputs(self) -> bool {
        matches!(self, IoFilter::Outputs | IoFilter::Both)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            IoFilter::Inputs => "Show Inputs",
            IoFilter::Outputs => "Show Outputs",
            IoFilter::Both => "Show All",
        }
    }
}

impl FromStr for IoFilter {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inputs" | "input" | "in" => Ok(IoFilter::Inputs),
            "outputs" | "output" | "out" => Ok(IoFilter::Outputs),
            "both" | "all" => Ok(IoFilter::Both),
            _ => Err(ParseKeyError {
                kind: "io filter",
                value: s.to_string(),
            }),
        }
    }
}

/// One previewed item and who produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub text: String,
    /// `None` when the producer is blank
    pub source: Option<String>,
}

/// Truncated listing of one side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoPreview {
    pub total: usize,
    pub items: Vec<PreviewItem>,
    pub more: usize,
}

impl IoPreview {
    fn from_pairs<'a>(pairs: impl ExactSizeIterator<Item = (&'a str, &'a str)>) -> Self {
        let total = pairs.len();
        let items = pairs
            .take(PREVIEW_LIMIT)
            .map(|(text, source)| PreviewItem {
                text: text.to_string(),
                source: (!source.is_empty()).then(|| source.to_string()),
            })
            .collect();
        Self {
            total,
            items,
            more: total.saturating_sub(PREVIEW_LIMIT),
        }
    }
}

/// A phase box in the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowCard {
    pub id: PhaseId,
    pub name: String,
    pub duration: String,
    pub owner: String,
    pub value_add_time: String,
    pub input_count: usize,
    pub output_count: usize,
    pub criteria_count: usize,
    pub inputs: Option<IoPreview>,
    pub outputs: Option<IoPreview>,
}

impl FlowCard {
    fn project(phase: &Phase, filter: IoFilter) -> Self {
        let inputs = filter.shows_inputs().then(|| {
            IoPreview::from_pairs(
                phase
                    .inputs
                    .iter()
                    .map(|i| (i.input.as_str(), i.produced_by.as_str())),
            )
        });
        let outputs = filter.shows_outputs().then(|| {
            IoPreview::from_pairs(
                phase
                    .outputs
                    .iter()
                    .map(|o| (o.output.as_str(), o.produced_by.as_str())),
            )
        });
        Self {
            id: phase.id,
            name: phase.name.clone(),
            duration: phase.metadata.duration.clone(),
            owner: phase.metadata.phase_owner.clone(),
            value_add_time: phase.metadata.value_add_time.clone(),
            input_count: phase.inputs.len(),
            output_count: phase.outputs.len(),
            criteria_count: phase.exit_criteria.len(),
            inputs,
            outputs,
        }
    }
}

/// The whole flow, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Illustration {
    pub filter: IoFilter,
    pub cards: Vec<FlowCard>,
}

/// Project the document into flow cards
#[must_use]
pub fn illustrate(document: &Document, filter: IoFilter) -> Illustration {
    Illustration {
        filter,
        cards: document
            .phases
            .iter()
            .map(|phase| FlowCard::project(phase, filter))
            .collect(),
    }
}
