//! Document, phase and metadata types
//!
//! JSON field names follow the exchange format (`exitCriteria`,
//! `phaseOwner`, `keyStakeholders`, ...). Missing scalars decode as empty
//! strings and missing lists as empty lists.

use crate::record::{CriteriaItem, InputItem, MetricItem, OutputItem};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique phase identifier
///
/// Immutable after creation. Unique within a document, not necessarily
/// contiguous or sorted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PhaseId(pub u64);

impl PhaseId {
    /// Raw numeric value
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PhaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhaseId {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(PhaseId)
            .map_err(|_| ParseKeyError::new("phase id", s))
    }
}

/// Error for parsing user-supplied keys (field names, section names, ids)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseKeyError {
    /// What was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl ParseKeyError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// The whole value stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Ordered phases
    pub phases: Vec<Phase>,
}

impl Document {
    /// Create document from parts
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, phases: Vec<Phase>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            phases,
        }
    }

    /// Phase by id
    #[must_use]
    pub fn phase(&self, id: PhaseId) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == id)
    }

    /// Sequence position of a phase
    #[must_use]
    pub fn position(&self, id: PhaseId) -> Option<usize> {
        self.phases.iter().position(|p| p.id == id)
    }

    /// Whether a phase with this id exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: PhaseId) -> bool {
        self.position(id).is_some()
    }

    /// Id of the first phase in sequence order
    #[inline]
    #[must_use]
    pub fn first_phase_id(&self) -> Option<PhaseId> {
        self.phases.first().map(|p| p.id)
    }

    /// Phase ids in sequence order
    pub fn ids(&self) -> impl Iterator<Item = PhaseId> + '_ {
        self.phases.iter().map(|p| p.id)
    }

    /// Id the next added phase receives: `max + 1`, or `1` when empty
    ///
    /// `None` once the largest id is `u64::MAX`: there is no id above it.
    #[must_use]
    pub fn next_phase_id(&self) -> Option<PhaseId> {
        self.ids()
            .max()
            .map_or(Some(PhaseId(1)), |max| max.0.checked_add(1).map(PhaseId))
    }

    /// Number of phases
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// True when the document has no phases
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// First id that appears more than once, if any
    #[must_use]
    pub fn duplicate_id(&self) -> Option<PhaseId> {
        let mut seen = std::collections::HashSet::new();
        self.ids().find(|id| !seen.insert(*id))
    }
}

/// One stage of the value stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Immutable identifier
    pub id: PhaseId,
    /// Title
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub inputs: Vec<InputItem>,
    #[serde(default)]
    pub outputs: Vec<OutputItem>,
    #[serde(default)]
    pub exit_criteria: Vec<CriteriaItem>,
    #[serde(default)]
    pub metrics: Vec<MetricItem>,
}

impl Phase {
    /// Create phase with default metadata and empty record lists
    #[must_use]
    pub fn new(id: PhaseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            metadata: Metadata::default(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            exit_criteria: Vec::new(),
            metrics: Vec::new(),
        }
    }

    /// With metadata
    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Number of records in a section
    #[must_use]
    pub fn section_len(&self, section: PhaseSection) -> usize {
        match section {
            PhaseSection::Inputs => self.inputs.len(),
            PhaseSection::Outputs => self.outputs.len(),
            PhaseSection::ExitCriteria => self.exit_criteria.len(),
            PhaseSection::Metrics => self.metrics.len(),
        }
    }
}

/// Scalar phase facts and stakeholders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub description: String,
    pub phase_owner: String,
    pub duration: String,
    pub value_add_time: String,
    pub key_stakeholders: Vec<String>,
    pub first_actor: String,
    pub next_actor: String,
}

impl Metadata {
    /// Read a scalar field
    #[must_use]
    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Description => &self.description,
            MetadataField::PhaseOwner => &self.phase_owner,
            MetadataField::Duration => &self.duration,
            MetadataField::ValueAddTime => &self.value_add_time,
            MetadataField::FirstActor => &self.first_actor,
            MetadataField::NextActor => &self.next_actor,
        }
    }

    /// Copy with one scalar field replaced
    #[must_use]
    pub fn with_field(mut self, field: MetadataField, value: impl Into<String>) -> Self {
        let slot = match field {
            MetadataField::Description => &mut self.description,
            MetadataField::PhaseOwner => &mut self.phase_owner,
            MetadataField::Duration => &mut self.duration,
            MetadataField::ValueAddTime => &mut self.value_add_time,
            MetadataField::FirstActor => &mut self.first_actor,
            MetadataField::NextActor => &mut self.next_actor,
        };
        *slot = value.into();
        self
    }
}

/// Independently editable scalar metadata fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Description,
    PhaseOwner,
    Duration,
    ValueAddTime,
    FirstActor,
    NextActor,
}

impl MetadataField {
    /// All fields in display order
    pub const ALL: [MetadataField; 6] = [
        MetadataField::Description,
        MetadataField::PhaseOwner,
        MetadataField::Duration,
        MetadataField::ValueAddTime,
        MetadataField::FirstActor,
        MetadataField::NextActor,
    ];

    /// Exchange-format key
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            MetadataField::Description => "description",
            MetadataField::PhaseOwner => "phaseOwner",
            MetadataField::Duration => "duration",
            MetadataField::ValueAddTime => "valueAddTime",
            MetadataField::FirstActor => "firstActor",
            MetadataField::NextActor => "nextActor",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MetadataField::Description => "Phase Description",
            MetadataField::PhaseOwner => "Phase Owner",
            MetadataField::Duration => "Duration",
            MetadataField::ValueAddTime => "Value-Add Time",
            MetadataField::FirstActor => "First Actor",
            MetadataField::NextActor => "Next Actor in Stream",
        }
    }
}

impl FromStr for MetadataField {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(wanted))
            .or_else(|| match wanted.to_ascii_lowercase().as_str() {
                "owner" => Some(MetadataField::PhaseOwner),
                "value-add" | "valueadd" => Some(MetadataField::ValueAddTime),
                _ => None,
            })
            .ok_or_else(|| ParseKeyError::new("metadata field", s))
    }
}

/// The four record tables of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseSection {
    Inputs,
    Outputs,
    ExitCriteria,
    Metrics,
}

impl PhaseSection {
    /// All sections in display order
    pub const ALL: [PhaseSection; 4] = [
        PhaseSection::Inputs,
        PhaseSection::Outputs,
        PhaseSection::ExitCriteria,
        PhaseSection::Metrics,
    ];

    /// Exchange-format key
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            PhaseSection::Inputs => "inputs",
            PhaseSection::Outputs => "outputs",
            PhaseSection::ExitCriteria => "exitCriteria",
            PhaseSection::Metrics => "metrics",
        }
    }

    /// Section heading
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            PhaseSection::Inputs => "Inputs",
            PhaseSection::Outputs => "Outputs (Artifacts)",
            PhaseSection::ExitCriteria => "Exit Criteria",
            PhaseSection::Metrics => "Metrics",
        }
    }
}

impl FromStr for PhaseSection {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inputs" | "input" => Ok(PhaseSection::Inputs),
            "outputs" | "output" => Ok(PhaseSection::Outputs),
            "exitcriteria" | "exit-criteria" | "criteria" => Ok(PhaseSection::ExitCriteria),
            "metrics" | "metric" => Ok(PhaseSection::Metrics),
            _ => Err(ParseKeyError::new("section", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(ids: &[u64]) -> Document {
        Document::new(
            "stream",
            "",
            ids.iter().map(|i| Phase::new(PhaseId(*i), format!("P{i}"))).collect(),
        )
    }

    #[test]
    fn next_phase_id_is_max_plus_one() {
        assert_eq!(doc(&[3, 1, 7, 2]).next_phase_id(), Some(PhaseId(8)));
    }

    #[test]
    fn next_phase_id_defaults_to_one() {
        assert_eq!(doc(&[]).next_phase_id(), Some(PhaseId(1)));
    }

    #[test]
    fn next_phase_id_exhausted_at_max() {
        assert_eq!(doc(&[1, u64::MAX]).next_phase_id(), None);
        assert_eq!(doc(&[u64::MAX - 1]).next_phase_id(), Some(PhaseId(u64::MAX)));
    }

    #[test]
    fn duplicate_id_detected() {
        assert_eq!(doc(&[1, 2, 1]).duplicate_id(), Some(PhaseId(1)));
        assert_eq!(doc(&[1, 2, 3]).duplicate_id(), None);
    }

    #[test]
    fn metadata_decodes_missing_fields_as_empty() {
        let meta: Metadata = serde_json::from_str(r#"{"phaseOwner": "PMO"}"#).unwrap();
        assert_eq!(meta.phase_owner, "PMO");
        assert_eq!(meta.duration, "");
        assert!(meta.key_stakeholders.is_empty());
    }

    #[test]
    fn phase_uses_camel_case_keys() {
        let mut phase = Phase::new(PhaseId(4), "Build");
        phase.exit_criteria.push(CriteriaItem::new("Tests pass", "QA"));
        let value = serde_json::to_value(&phase).unwrap();
        assert_eq!(value["exitCriteria"][0]["approver"], "QA");
        assert_eq!(value["metadata"]["valueAddTime"], "");
        assert_eq!(value["id"], 4);
    }

    #[test]
    fn metadata_with_field_replaces_only_that_field() {
        let meta = Metadata::default()
            .with_field(MetadataField::Duration, "2 weeks")
            .with_field(MetadataField::NextActor, "Ops");
        assert_eq!(meta.get(MetadataField::Duration), "2 weeks");
        assert_eq!(meta.get(MetadataField::NextActor), "Ops");
        assert_eq!(meta.get(MetadataField::PhaseOwner), "");
    }

    #[test]
    fn metadata_field_parses_keys_and_aliases() {
        assert_eq!("phaseOwner".parse(), Ok(MetadataField::PhaseOwner));
        assert_eq!("owner".parse(), Ok(MetadataField::PhaseOwner));
        assert_eq!("VALUEADDTIME".parse(), Ok(MetadataField::ValueAddTime));
        assert!("colour".parse::<MetadataField>().is_err());
    }

    #[test]
    fn section_parses_aliases() {
        assert_eq!("exit-criteria".parse(), Ok(PhaseSection::ExitCriteria));
        assert_eq!("Metrics".parse(), Ok(PhaseSection::Metrics));
        assert!("notes".parse::<PhaseSection>().is_err());
    }
}
