//! Record types and the field-schema trait
//!
//! Every record is a flat set of string fields described by an ordered
//! [`FieldSpec`] list, so a single generic table editor can handle all four
//! phase tables.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One column of a record schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Exchange-format key
    pub key: &'static str,
    /// Column heading
    pub label: &'static str,
}

impl FieldSpec {
    #[inline]
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Uniform record described by a field schema
///
/// # Contract
/// - `FIELDS` is non-empty and keys are unique
/// - `field` and `field_mut` return `Some` for exactly the keys in `FIELDS`
/// - `Default` yields a record with every field set to `""`
pub trait Record: Debug + Clone + Default + PartialEq + Send + Sync + 'static {
    /// Ordered schema
    const FIELDS: &'static [FieldSpec];

    /// Read a field by key
    fn field(&self, key: &str) -> Option<&str>;

    /// Mutable access to a field by key
    fn field_mut(&mut self, key: &str) -> Option<&mut String>;

    /// Set a field; returns false for unknown keys
    fn set_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.field_mut(key) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Whether `key` names a field of this record
    #[must_use]
    fn has_field(key: &str) -> bool {
        Self::FIELDS.iter().any(|f| f.key == key)
    }
}

/// Inbound item of a phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputItem {
    pub input: String,
    pub produced_by: String,
}

impl InputItem {
    #[must_use]
    pub fn new(input: impl Into<String>, produced_by: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            produced_by: produced_by.into(),
        }
    }
}

impl Record for InputItem {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("input", "Input"),
        FieldSpec::new("producedBy", "Produced By"),
    ];

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "input" => Some(&self.input),
            "producedBy" => Some(&self.produced_by),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "input" => Some(&mut self.input),
            "producedBy" => Some(&mut self.produced_by),
            _ => None,
        }
    }
}

/// Artifact produced by a phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputItem {
    pub output: String,
    pub produced_by: String,
}

impl OutputItem {
    #[must_use]
    pub fn new(output: impl Into<String>, produced_by: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            produced_by: produced_by.into(),
        }
    }
}

impl Record for OutputItem {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("output", "Output"),
        FieldSpec::new("producedBy", "Produced By"),
    ];

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "output" => Some(&self.output),
            "producedBy" => Some(&self.produced_by),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "output" => Some(&mut self.output),
            "producedBy" => Some(&mut self.produced_by),
            _ => None,
        }
    }
}

/// Exit criterion and who signs it off
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaItem {
    pub criteria: String,
    pub approver: String,
}

impl CriteriaItem {
    #[must_use]
    pub fn new(criteria: impl Into<String>, approver: impl Into<String>) -> Self {
        Self {
            criteria: criteria.into(),
            approver: approver.into(),
        }
    }
}

impl Record for CriteriaItem {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("criteria", "Criteria"),
        FieldSpec::new("approver", "Approver"),
    ];

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "criteria" => Some(&self.criteria),
            "approver" => Some(&self.approver),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "criteria" => Some(&mut self.criteria),
            "approver" => Some(&mut self.approver),
            _ => None,
        }
    }
}

/// Metric with its target value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricItem {
    pub metric: String,
    pub target: String,
}

impl MetricItem {
    #[must_use]
    pub fn new(metric: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            target: target.into(),
        }
    }
}

impl Record for MetricItem {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("metric", "Metric"),
        FieldSpec::new("target", "Target"),
    ];

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "metric" => Some(&self.metric),
            "target" => Some(&self.target),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "metric" => Some(&mut self.metric),
            "target" => Some(&mut self.target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_is_consistent<R: Record>() {
        let blank = R::default();
        assert!(!R::FIELDS.is_empty());
        for spec in R::FIELDS {
            assert_eq!(blank.field(spec.key), Some(""), "field {}", spec.key);
        }
        assert_eq!(blank.field("nope"), None);
    }

    #[test]
    fn all_schemas_consistent() {
        schema_is_consistent::<InputItem>();
        schema_is_consistent::<OutputItem>();
        schema_is_consistent::<CriteriaItem>();
        schema_is_consistent::<MetricItem>();
    }

    #[test]
    fn set_field_rejects_unknown_key() {
        let mut item = MetricItem::default();
        assert!(item.set_field("target", "95%"));
        assert!(!item.set_field("owner", "x"));
        assert_eq!(item.target, "95%");
    }

    #[test]
    fn io_items_decode_produced_by() {
        let item: OutputItem =
            serde_json::from_str(r#"{"output": "Roadmap", "producedBy": "PMO"}"#).unwrap();
        assert_eq!(item, OutputItem::new("Roadmap", "PMO"));

        let partial: InputItem = serde_json::from_str(r#"{"input": "Brief"}"#).unwrap();
        assert_eq!(partial.produced_by, "");
    }

    #[test]
    fn has_field_matches_schema() {
        assert!(InputItem::has_field("producedBy"));
        assert!(!InputItem::has_field("output"));
    }
}
