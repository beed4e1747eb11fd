//! Testing utilities for the value stream workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use std::ops::Range;
use vs_model::{
    CriteriaItem, Document, InputItem, Metadata, MetricItem, OutputItem, Phase, PhaseId,
};

/// Bare phase with the given id and a derived name
pub fn sample_phase(id: u64) -> Phase {
    Phase::new(PhaseId(id), format!("Phase {id}"))
}

/// Phase with every section populated
pub fn rich_phase(id: u64) -> Phase {
    let metadata = Metadata {
        description: format!("Work done in phase {id}"),
        phase_owner: "Product Owner".to_string(),
        duration: "1-2 weeks".to_string(),
        value_add_time: "60%".to_string(),
        key_stakeholders: vec!["Operating Officer".to_string(), "PMO".to_string()],
        first_actor: "Product Owner".to_string(),
        next_actor: "Architecture Team".to_string(),
    };

    let mut phase = Phase::new(PhaseId(id), format!("Phase {id}")).with_metadata(metadata);
    phase.inputs = vec![
        InputItem::new("Business case", "Operating Officer"),
        InputItem::new("Customer feedback", "Customer / Users"),
        InputItem::new("Budget envelope", "PMO"),
        InputItem::new("Prior roadmap", "Product Owner"),
    ];
    phase.outputs = vec![
        OutputItem::new("Prioritised backlog", "Product Owner"),
        OutputItem::new("Release plan", "PMO / TPM"),
    ];
    phase.exit_criteria = vec![CriteriaItem::new("Backlog approved", "Operating Officer")];
    phase.metrics = vec![MetricItem::new("Lead time", "< 2 weeks")];
    phase
}

/// Document whose phases carry the given ids, in order
pub fn document_with_ids(ids: &[u64]) -> Document {
    Document::new(
        "Test Stream",
        "Fixture document",
        ids.iter().map(|id| sample_phase(*id)).collect(),
    )
}

/// Document of fully populated phases with the given ids
pub fn rich_document(ids: &[u64]) -> Document {
    Document::new(
        "Rich Stream",
        "Fixture document with populated phases",
        ids.iter().map(|id| rich_phase(*id)).collect(),
    )
}

/// Free text, including quotes, backslashes, line breaks and non-ASCII
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "\\PC{0,24}",
        1 => "[\"\\\\\n\t a-z\u{e9}\u{6f22}\u{1f600}]{0,16}",
    ]
}

fn arb_metadata() -> impl Strategy<Value = Metadata> {
    (
        (arb_text(), arb_text(), arb_text(), arb_text()),
        prop::collection::vec("\\PC{1,12}", 0..4),
        (arb_text(), arb_text()),
    )
        .prop_map(
            |((description, phase_owner, duration, value_add_time), key_stakeholders, (first_actor, next_actor))| {
                Metadata {
                    description,
                    phase_owner,
                    duration,
                    value_add_time,
                    key_stakeholders,
                    first_actor,
                    next_actor,
                }
            },
        )
}

/// Arbitrary phase carrying `id`
pub fn arb_phase(id: PhaseId) -> impl Strategy<Value = Phase> {
    (
        arb_text(),
        arb_metadata(),
        prop::collection::vec((arb_text(), arb_text()), 0..4),
        prop::collection::vec((arb_text(), arb_text()), 0..4),
        prop::collection::vec((arb_text(), arb_text()), 0..3),
        prop::collection::vec((arb_text(), arb_text()), 0..3),
    )
        .prop_map(move |(name, metadata, inputs, outputs, criteria, metrics)| {
            let mut phase = Phase::new(id, name).with_metadata(metadata);
            phase.inputs = inputs.into_iter().map(|(a, b)| InputItem::new(a, b)).collect();
            phase.outputs = outputs.into_iter().map(|(a, b)| OutputItem::new(a, b)).collect();
            phase.exit_criteria = criteria
                .into_iter()
                .map(|(a, b)| CriteriaItem::new(a, b))
                .collect();
            phase.metrics = metrics.into_iter().map(|(a, b)| MetricItem::new(a, b)).collect();
            phase
        })
}

/// Arbitrary valid document: unique, unsorted ids and `size` phases
pub fn arb_document(size: Range<usize>) -> impl Strategy<Value = Document> {
    prop::collection::btree_set(1u64..500, size)
        .prop_flat_map(|ids| Just(ids.into_iter().collect::<Vec<_>>()).prop_shuffle())
        .prop_flat_map(|ids| {
            let phases: Vec<_> = ids.into_iter().map(|id| arb_phase(PhaseId(id))).collect();
            (arb_text(), arb_text(), phases)
        })
        .prop_map(|(name, description, phases)| Document::new(name, description, phases))
}
