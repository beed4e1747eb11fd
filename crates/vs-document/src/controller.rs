//! Document controller
//!
//! Owns the canonical [`Document`]. Every mutation goes through one of the
//! reducer-style operations here and produces a new document value; callers
//! holding an earlier [`snapshot`](DocumentController::snapshot) keep seeing
//! the document as it was when they took it.

use crate::error::DocumentError;
use std::sync::Arc;
use vs_model::{Document, Phase, PhaseId};

/// Name given to phases created by [`DocumentController::add_phase`]
pub const DEFAULT_PHASE_NAME: &str = "New Phase";

/// Check the structural invariants every controlled document satisfies
///
/// # Errors
/// - [`DocumentError::Empty`] when there are no phases
/// - [`DocumentError::DuplicatePhaseId`] when two phases share an id
pub fn check_invariants(document: &Document) -> Result<(), DocumentError> {
    if document.is_empty() {
        return Err(DocumentError::Empty);
    }
    if let Some(id) = document.duplicate_id() {
        return Err(DocumentError::DuplicatePhaseId(id));
    }
    Ok(())
}

/// Asks the user whether a phase may be deleted
pub trait ConfirmDelete {
    /// Return true to proceed with the deletion
    fn confirm_delete(&mut self, phase: &Phase) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: FnMut(&Phase) -> bool,
{
    fn confirm_delete(&mut self, phase: &Phase) -> bool {
        self(phase)
    }
}

/// Result of a delete request that passed the last-phase check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User declined; document unchanged
    Declined,
    /// Phase removed
    Removed {
        /// Removed phase
        id: PhaseId,
        /// Position it occupied
        index: usize,
        /// First phase in sequence order after removal
        first_remaining: PhaseId,
    },
}

/// Single source of truth for the value stream
#[derive(Debug, Clone)]
pub struct DocumentController {
    document: Arc<Document>,
    revision: u64,
}

impl DocumentController {
    /// Take ownership of an initial document
    ///
    /// # Errors
    /// Returns error if the document violates [`check_invariants`]
    pub fn new(document: Document) -> Result<Self, DocumentError> {
        check_invariants(&document)?;
        Ok(Self {
            document: Arc::new(document),
            revision: 0,
        })
    }

    /// Current document
    #[inline]
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Shared handle to the current document value
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Arc<Document> {
        Arc::clone(&self.document)
    }

    /// Number of mutations applied so far
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the phase with matching id, keeping its position
    ///
    /// Returns false (and changes nothing) when no phase has `phase_id`.
    /// The stored phase always keeps `phase_id` as its id.
    pub fn update_phase(&mut self, phase_id: PhaseId, mut new_phase: Phase) -> bool {
        let Some(index) = self.document.position(phase_id) else {
            tracing::debug!(%phase_id, "update for unknown phase ignored");
            return false;
        };

        if new_phase.id != phase_id {
            tracing::warn!(
                %phase_id,
                proposed = %new_phase.id,
                "phase ids are immutable; keeping original id"
            );
            new_phase.id = phase_id;
        }

        Arc::make_mut(&mut self.document).phases[index] = new_phase;
        self.bump();
        tracing::debug!(%phase_id, revision = self.revision, "phase updated");
        true
    }

    /// Append a default phase with id `max + 1`
    ///
    /// Returns the new id. The caller is expected to make it the active
    /// editing phase.
    ///
    /// # Errors
    /// Returns [`DocumentError::IdSpaceExhausted`] when the largest id is
    /// `u64::MAX`; the document is left unchanged
    pub fn add_phase(&mut self) -> Result<PhaseId, DocumentError> {
        let Some(id) = self.document.next_phase_id() else {
            let max = PhaseId(u64::MAX);
            tracing::warn!(max = %max, "add refused: phase id space exhausted");
            return Err(DocumentError::IdSpaceExhausted { max });
        };
        Arc::make_mut(&mut self.document)
            .phases
            .push(Phase::new(id, DEFAULT_PHASE_NAME));
        self.bump();
        tracing::info!(phase_id = %id, phases = self.document.len(), "phase added");
        Ok(id)
    }

    /// Remove a phase after confirmation
    ///
    /// # Errors
    /// - [`DocumentError::LastPhase`] if only one phase remains (checked
    ///   before asking for confirmation)
    /// - [`DocumentError::PhaseNotFound`] for an unknown id
    pub fn delete_phase(
        &mut self,
        phase_id: PhaseId,
        confirm: &mut impl ConfirmDelete,
    ) -> Result<DeleteOutcome, DocumentError> {
        if self.document.len() <= 1 {
            tracing::warn!(%phase_id, "refusing to delete last phase");
            return Err(DocumentError::LastPhase { id: phase_id });
        }

        let index = self
            .document
            .position(phase_id)
            .ok_or(DocumentError::PhaseNotFound(phase_id))?;

        if !confirm.confirm_delete(&self.document.phases[index]) {
            tracing::debug!(%phase_id, "phase deletion declined");
            return Ok(DeleteOutcome::Declined);
        }

        let first_remaining = if index == 0 {
            self.document.phases[1].id
        } else {
            self.document.phases[0].id
        };

        Arc::make_mut(&mut self.document).phases.remove(index);
        self.bump();
        tracing::info!(%phase_id, phases = self.document.len(), "phase deleted");

        Ok(DeleteOutcome::Removed {
            id: phase_id,
            index,
            first_remaining,
        })
    }

    /// Replace the whole document
    ///
    /// # Errors
    /// Returns error if the new document violates [`check_invariants`];
    /// the current document is kept in that case.
    pub fn replace(&mut self, document: Document) -> Result<(), DocumentError> {
        check_invariants(&document)?;
        self.document = Arc::new(document);
        self.bump();
        tracing::info!(
            name = %self.document.name,
            phases = self.document.len(),
            "document replaced"
        );
        Ok(())
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
