//! Metadata editor
//!
//! Scalar fields report on every edit. The stakeholder list has its own
//! add-mode with a draft that is discarded whenever the editor is bound to a
//! different phase.

use crate::draft::TextDraft;
use vs_model::{Metadata, MetadataField, PhaseId};

/// Metadata edit operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataOp {
    SetField(MetadataField, String),
    BeginAddStakeholder,
    SetStakeholderDraft(String),
    CommitStakeholder,
    CancelAddStakeholder,
    RemoveStakeholder(usize),
}

/// Editor over one phase's metadata
#[derive(Debug, Clone)]
pub struct MetadataEditor {
    key: PhaseId,
    metadata: Metadata,
    stakeholder: TextDraft,
}

impl MetadataEditor {
    #[must_use]
    pub fn new(key: PhaseId, metadata: Metadata) -> Self {
        Self {
            key,
            metadata,
            stakeholder: TextDraft::Idle,
        }
    }

    /// Bind new metadata; a different phase discards the stakeholder draft
    pub fn rebind(&mut self, key: PhaseId, metadata: Metadata) {
        if key != self.key {
            self.stakeholder.discard();
            self.key = key;
        }
        self.metadata = metadata;
    }

    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Whether the stakeholder add-mode is open
    #[inline]
    #[must_use]
    pub fn is_adding_stakeholder(&self) -> bool {
        self.stakeholder.is_editing()
    }

    /// Pending stakeholder text while in add-mode
    #[inline]
    #[must_use]
    pub fn stakeholder_draft(&self) -> Option<&str> {
        self.stakeholder.text()
    }

    /// Set a scalar field; always reports
    pub fn set_field(&mut self, field: MetadataField, value: impl Into<String>) -> Metadata {
        self.metadata = std::mem::take(&mut self.metadata).with_field(field, value);
        tracing::debug!(phase_id = %self.key, field = field.key(), "metadata field edited");
        self.metadata.clone()
    }

    pub fn begin_add_stakeholder(&mut self) {
        self.stakeholder.begin("");
    }

    /// Update the pending stakeholder; ignored outside add-mode
    pub fn set_stakeholder_draft(&mut self, text: impl Into<String>) -> bool {
        self.stakeholder.set(text)
    }

    /// Append the trimmed draft
    ///
    /// Empty or whitespace-only drafts are rejected silently. On success the
    /// draft is cleared and add-mode stays open for the next entry.
    pub fn commit_stakeholder(&mut self) -> Option<Metadata> {
        let name = self.stakeholder.text()?.trim();
        if name.is_empty() {
            return None;
        }
        let name = name.to_string();
        self.stakeholder.clear_text();
        tracing::debug!(phase_id = %self.key, stakeholder = %name, "stakeholder added");
        self.metadata.key_stakeholders.push(name);
        Some(self.metadata.clone())
    }

    /// Close add-mode and drop the draft
    pub fn cancel_add_stakeholder(&mut self) {
        self.stakeholder.discard();
    }

    /// Remove a stakeholder by position; out-of-range reports nothing
    pub fn remove_stakeholder(&mut self, index: usize) -> Option<Metadata> {
        if index >= self.metadata.key_stakeholders.len() {
            return None;
        }
        let removed = self.metadata.key_stakeholders.remove(index);
        tracing::debug!(phase_id = %self.key, stakeholder = %removed, "stakeholder removed");
        Some(self.metadata.clone())
    }

    /// Apply an operation; `Some` carries the reported metadata
    pub fn apply(&mut self, op: MetadataOp) -> Option<Metadata> {
        match op {
            MetadataOp::SetField(field, value) => Some(self.set_field(field, value)),
            MetadataOp::BeginAddStakeholder => {
                self.begin_add_stakeholder();
                None
            }
            MetadataOp::SetStakeholderDraft(text) => {
                self.set_stakeholder_draft(text);
                None
            }
            MetadataOp::CommitStakeholder => self.commit_stakeholder(),
            MetadataOp::CancelAddStakeholder => {
                self.cancel_add_stakeholder();
                None
            }
            MetadataOp::RemoveStakeholder(index) => self.remove_stakeholder(index),
        }
    }
}
