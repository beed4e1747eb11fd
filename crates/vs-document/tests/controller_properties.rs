//! Property tests for the document controller operation set.
//!
//! These pin down the reducer contract every editor relies on:
//! - add_phase grows the document by one with a strictly larger id.
//! - update_phase replaces exactly one position and preserves order.
//! - delete_phase refuses the last phase and otherwise removes exactly one.

use proptest::prelude::*;
use vs_document::{DeleteOutcome, DocumentController, DocumentError};
use vs_model::{Phase, PhaseId};
use vs_test_utils::{arb_document, sample_phase};

fn confirm_all(_: &Phase) -> bool {
    true
}

proptest! {
    #[test]
    fn add_phase_grows_by_one_with_fresh_max_id(doc in arb_document(1..8)) {
        let before = doc.clone();
        let mut ctl = DocumentController::new(doc).unwrap();

        let id = ctl.add_phase().unwrap();

        prop_assert_eq!(ctl.document().len(), before.len() + 1);
        prop_assert!(before.ids().all(|existing| id > existing));
        prop_assert_eq!(&ctl.document().phases[..before.len()], &before.phases[..]);
    }

    #[test]
    fn update_phase_replaces_one_position(
        doc in arb_document(1..8),
        pick in any::<prop::sample::Index>(),
        name in "[A-Za-z ]{1,16}",
    ) {
        let before = doc.clone();
        let index = pick.index(before.len());
        let id = before.phases[index].id;
        let mut replacement = sample_phase(id.get());
        replacement.name = name;

        let mut ctl = DocumentController::new(doc).unwrap();
        prop_assert!(ctl.update_phase(id, replacement.clone()));

        for (i, phase) in ctl.document().phases.iter().enumerate() {
            if i == index {
                prop_assert_eq!(phase, &replacement);
            } else {
                prop_assert_eq!(phase, &before.phases[i]);
            }
        }
    }

    #[test]
    fn single_phase_delete_is_refused(doc in arb_document(1..2)) {
        let before = doc.clone();
        let id = before.phases[0].id;
        let mut ctl = DocumentController::new(doc).unwrap();

        let result = ctl.delete_phase(id, &mut confirm_all);

        prop_assert_eq!(result, Err(DocumentError::LastPhase { id }));
        prop_assert_eq!(ctl.document(), &before);
    }

    #[test]
    fn delete_removes_exactly_one(
        doc in arb_document(2..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let before = doc.clone();
        let index = pick.index(before.len());
        let id = before.phases[index].id;
        let mut ctl = DocumentController::new(doc).unwrap();

        let outcome = ctl.delete_phase(id, &mut confirm_all).unwrap();

        let mut expected = before.phases.clone();
        expected.remove(index);
        prop_assert_eq!(&ctl.document().phases, &expected);
        prop_assert_eq!(
            outcome,
            DeleteOutcome::Removed { id, index, first_remaining: expected[0].id }
        );
    }
}

#[test]
fn unknown_update_never_bumps_revision() {
    let mut ctl = DocumentController::new(vs_test_utils::document_with_ids(&[1, 2])).unwrap();
    assert!(!ctl.update_phase(PhaseId(42), sample_phase(42)));
    assert_eq!(ctl.revision(), 0);
}
