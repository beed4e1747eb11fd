//! Phase editor
//!
//! Composes one [`MetadataEditor`] and four [`RecordTableEditor`]s into the
//! full edit surface of a phase. Child edits report a partial update which
//! is merged into the phase; the merged phase is what gets reported upward.

use crate::draft::TextDraft;
use crate::error::TableError;
use crate::metadata::{MetadataEditor, MetadataOp};
use crate::table::{RecordTableEditor, TableGrid, TableOp};
use vs_model::{CriteriaItem, InputItem, MetricItem, OutputItem, Phase, PhaseId, PhaseSection, Record};

/// Title edit operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOp {
    Begin,
    SetDraft(String),
    /// Explicit confirmation or loss of focus
    Commit,
    Cancel,
}

/// Any edit the phase editor accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseEdit {
    Title(TitleOp),
    Metadata(MetadataOp),
    Table(PhaseSection, TableOp),
}

/// Full edit surface of one phase
#[derive(Debug, Clone)]
pub struct PhaseEditor {
    phase: Phase,
    title: TextDraft,
    metadata: MetadataEditor,
    inputs: RecordTableEditor<InputItem>,
    outputs: RecordTableEditor<OutputItem>,
    exit_criteria: RecordTableEditor<CriteriaItem>,
    metrics: RecordTableEditor<MetricItem>,
}

impl PhaseEditor {
    /// Bind to a phase
    #[must_use]
    pub fn new(phase: Phase) -> Self {
        let key = phase.id;
        Self {
            title: TextDraft::Idle,
            metadata: MetadataEditor::new(key, phase.metadata.clone()),
            inputs: RecordTableEditor::new(key, phase.inputs.clone()),
            outputs: RecordTableEditor::new(key, phase.outputs.clone()),
            exit_criteria: RecordTableEditor::new(key, phase.exit_criteria.clone()),
            metrics: RecordTableEditor::new(key, phase.metrics.clone()),
            phase,
        }
    }

    /// Bind a new phase value
    ///
    /// Binding a phase with a different id resets every draft and edit mode.
    /// Rebinding the same id refreshes the data and keeps in-progress drafts.
    pub fn rebind(&mut self, phase: Phase) {
        let key = phase.id;
        if key != self.phase.id {
            tracing::debug!(from = %self.phase.id, to = %key, "phase editor rebound");
            self.title.discard();
        }
        self.metadata.rebind(key, phase.metadata.clone());
        self.inputs.rebind(key, phase.inputs.clone());
        self.outputs.rebind(key, phase.outputs.clone());
        self.exit_criteria.rebind(key, phase.exit_criteria.clone());
        self.metrics.rebind(key, phase.metrics.clone());
        self.phase = phase;
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> PhaseId {
        self.phase.id
    }

    #[inline]
    #[must_use]
    pub fn metadata_editor(&self) -> &MetadataEditor {
        &self.metadata
    }

    #[inline]
    #[must_use]
    pub fn inputs(&self) -> &RecordTableEditor<InputItem> {
        &self.inputs
    }

    #[inline]
    #[must_use]
    pub fn outputs(&self) -> &RecordTableEditor<OutputItem> {
        &self.outputs
    }

    #[inline]
    #[must_use]
    pub fn exit_criteria(&self) -> &RecordTableEditor<CriteriaItem> {
        &self.exit_criteria
    }

    #[inline]
    #[must_use]
    pub fn metrics(&self) -> &RecordTableEditor<MetricItem> {
        &self.metrics
    }

    /// Rendered table for a section
    #[must_use]
    pub fn grid(&self, section: PhaseSection) -> TableGrid<'_> {
        match section {
            PhaseSection::Inputs => self.inputs.grid(),
            PhaseSection::Outputs => self.outputs.grid(),
            PhaseSection::ExitCriteria => self.exit_criteria.grid(),
            PhaseSection::Metrics => self.metrics.grid(),
        }
    }

    /// Title as it should be shown: the draft while editing, else the name
    #[must_use]
    pub fn displayed_title(&self) -> &str {
        self.title.text().unwrap_or(&self.phase.name)
    }

    #[inline]
    #[must_use]
    pub fn is_editing_title(&self) -> bool {
        self.title.is_editing()
    }

    pub fn begin_title_edit(&mut self) {
        self.title.begin(self.phase.name.clone());
    }

    /// Update the title draft; never reported
    pub fn set_title_draft(&mut self, text: impl Into<String>) -> bool {
        self.title.set(text)
    }

    /// Commit the title draft
    ///
    /// Accepted only if the trimmed draft is non-empty and differs from the
    /// current name; otherwise the title reverts and nothing is reported.
    pub fn commit_title(&mut self) -> Option<Phase> {
        let draft = self.title.take()?;
        let proposed = draft.trim();
        if proposed.is_empty() || proposed == self.phase.name {
            tracing::debug!(phase_id = %self.phase.id, "title edit reverted");
            return None;
        }
        tracing::debug!(phase_id = %self.phase.id, name = %proposed, "phase renamed");
        self.phase.name = proposed.to_string();
        Some(self.phase.clone())
    }

    /// Drop the title draft
    pub fn cancel_title_edit(&mut self) {
        self.title.discard();
    }

    /// Apply a metadata edit and merge the reported metadata
    pub fn apply_metadata(&mut self, op: MetadataOp) -> Option<Phase> {
        let metadata = self.metadata.apply(op)?;
        self.phase.metadata = metadata;
        Some(self.phase.clone())
    }

    /// Apply a table edit and merge the reported list
    ///
    /// # Errors
    /// Returns error if the operation addresses a missing row or field
    pub fn apply_table(
        &mut self,
        section: PhaseSection,
        op: TableOp,
    ) -> Result<Option<Phase>, TableError> {
        let merged = match section {
            PhaseSection::Inputs => merge(&mut self.inputs, op, &mut self.phase.inputs)?,
            PhaseSection::Outputs => merge(&mut self.outputs, op, &mut self.phase.outputs)?,
            PhaseSection::ExitCriteria => {
                merge(&mut self.exit_criteria, op, &mut self.phase.exit_criteria)?
            }
            PhaseSection::Metrics => merge(&mut self.metrics, op, &mut self.phase.metrics)?,
        };
        Ok(merged.then(|| self.phase.clone()))
    }

    /// Apply any edit
    ///
    /// # Errors
    /// Returns error if a table edit addresses a missing row or field
    pub fn apply(&mut self, edit: PhaseEdit) -> Result<Option<Phase>, TableError> {
        match edit {
            PhaseEdit::Title(op) => Ok(self.apply_title(op)),
            PhaseEdit::Metadata(op) => Ok(self.apply_metadata(op)),
            PhaseEdit::Table(section, op) => self.apply_table(section, op),
        }
    }

    fn apply_title(&mut self, op: TitleOp) -> Option<Phase> {
        match op {
            TitleOp::Begin => {
                self.begin_title_edit();
                None
            }
            TitleOp::SetDraft(text) => {
                self.set_title_draft(text);
                None
            }
            TitleOp::Commit => self.commit_title(),
            TitleOp::Cancel => {
                self.cancel_title_edit();
                None
            }
        }
    }
}

fn merge<R: Record>(
    table: &mut RecordTableEditor<R>,
    op: TableOp,
    slot: &mut Vec<R>,
) -> Result<bool, TableError> {
    match table.apply(op)? {
        Some(rows) => {
            *slot = rows;
            Ok(true)
        }
        None => Ok(false),
    }
}
