//! Editing session
//!
//! Application root tying the document controller, the view coordinator
//! and the phase editor for the active phase together. The phase editor
//! never writes the document itself: whatever it reports is passed to
//! [`DocumentController::update_phase`] and the editor is rebound to the
//! stored result.

use crate::error::{SessionError, TableError};
use crate::phase::{PhaseEdit, PhaseEditor};
use crate::view::{Activation, View, ViewCoordinator};
use std::sync::Arc;
use vs_document::{ConfirmDelete, DeleteOutcome, DocumentController, DocumentError};
use vs_model::{Document, Phase, PhaseId};

/// The whole interactive state
#[derive(Debug, Clone)]
pub struct Session {
    controller: DocumentController,
    coordinator: ViewCoordinator,
    active: PhaseId,
    editor: PhaseEditor,
}

impl Session {
    /// Start a session on an initial document; the first phase is active
    ///
    /// # Errors
    /// Returns error if the document has no phases or duplicate ids
    pub fn new(document: Document) -> Result<Self, SessionError> {
        let controller = DocumentController::new(document)?;
        let first = controller.document().phases[0].clone();
        Ok(Self {
            active: first.id,
            editor: PhaseEditor::new(first),
            coordinator: ViewCoordinator::new(),
            controller,
        })
    }

    #[inline]
    #[must_use]
    pub fn document(&self) -> &Document {
        self.controller.document()
    }

    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Arc<Document> {
        self.controller.snapshot()
    }

    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.controller.revision()
    }

    #[inline]
    #[must_use]
    pub fn active_phase_id(&self) -> PhaseId {
        self.active
    }

    /// The active phase as stored in the document
    #[must_use]
    pub fn active_phase(&self) -> &Phase {
        self.editor.phase()
    }

    #[inline]
    #[must_use]
    pub fn editor(&self) -> &PhaseEditor {
        &self.editor
    }

    #[inline]
    #[must_use]
    pub fn view(&self) -> View {
        self.coordinator.view()
    }

    #[inline]
    #[must_use]
    pub fn focused(&self) -> Option<PhaseId> {
        self.coordinator.focused()
    }

    /// Make a phase the active editing phase
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownPhase`] for ids not in the document
    pub fn select_phase(&mut self, id: PhaseId) -> Result<(), SessionError> {
        if !self.document().contains(id) {
            return Err(SessionError::UnknownPhase(id));
        }
        self.active = id;
        self.sync_editor();
        Ok(())
    }

    /// Add a phase and make it active
    ///
    /// # Errors
    /// Returns error if the controller refuses the add; the active phase and
    /// editor stay as they were
    pub fn add_phase(&mut self) -> Result<PhaseId, SessionError> {
        let id = self.controller.add_phase()?;
        self.active = id;
        self.sync_editor();
        Ok(id)
    }

    /// Delete a phase, reassigning the active phase when needed
    ///
    /// # Errors
    /// Returns error if this is the last phase or the id is unknown
    pub fn delete_phase(
        &mut self,
        id: PhaseId,
        confirm: &mut impl ConfirmDelete,
    ) -> Result<DeleteOutcome, SessionError> {
        let outcome = self.controller.delete_phase(id, confirm)?;
        if let DeleteOutcome::Removed {
            first_remaining, ..
        } = outcome
        {
            if self.active == id {
                self.active = first_remaining;
            }
            if self.coordinator.focused() == Some(id) {
                self.coordinator.clear_focus();
            }
            self.sync_editor();
        }
        Ok(outcome)
    }

    /// Apply an edit to the active phase
    ///
    /// Returns true if the edit reported a change that was written to the
    /// document.
    ///
    /// # Errors
    /// Returns error if a table edit addresses a missing row or field
    pub fn apply_edit(&mut self, edit: PhaseEdit) -> Result<bool, SessionError> {
        self.edit(|editor| editor.apply(edit))
    }

    /// Run an action against the active phase editor
    ///
    /// A reported phase is written through the controller and the editor
    /// is rebound to the stored value. Returns true if the document changed.
    ///
    /// # Errors
    /// Returns error if the action fails
    pub fn edit<F>(&mut self, action: F) -> Result<bool, SessionError>
    where
        F: FnOnce(&mut PhaseEditor) -> Result<Option<Phase>, TableError>,
    {
        let Some(phase) = action(&mut self.editor)? else {
            return Ok(false);
        };
        let applied = self.controller.update_phase(self.active, phase);
        self.sync_editor();
        Ok(applied)
    }

    /// Replace the document with an imported one
    ///
    /// The first phase becomes active, the view switches to the
    /// visualization, and focus is dropped if its phase is gone.
    ///
    /// # Errors
    /// Returns error if the document violates the controller invariants;
    /// the session is unchanged in that case.
    pub fn load_import(&mut self, document: Document) -> Result<(), SessionError> {
        self.controller.replace(document)?;
        let first = self.controller.document().phases[0].clone();
        self.active = first.id;
        self.editor = PhaseEditor::new(first);
        if let Some(focused) = self.coordinator.focused() {
            if !self.document().contains(focused) {
                self.coordinator.clear_focus();
            }
        }
        self.coordinator.switch_to(View::Visualization);
        tracing::info!(active = %self.active, "import loaded");
        Ok(())
    }

    pub fn switch_view(&mut self, view: View) {
        self.coordinator.switch_to(view);
    }

    /// Activate a phase from the current view
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownPhase`] for ids not in the document
    pub fn activate_phase(&mut self, id: PhaseId) -> Result<Activation, SessionError> {
        if !self.document().contains(id) {
            return Err(SessionError::UnknownPhase(id));
        }
        Ok(self.coordinator.activate_phase(id))
    }

    pub fn clear_focus(&mut self) {
        self.coordinator.clear_focus();
    }

    fn sync_editor(&mut self) {
        match self.controller.document().phase(self.active) {
            Some(phase) => self.editor.rebind(phase.clone()),
            None => {
                tracing::error!(
                    active = %self.active,
                    error = %DocumentError::PhaseNotFound(self.active),
                    "active phase missing from document"
                );
            }
        }
    }
}
