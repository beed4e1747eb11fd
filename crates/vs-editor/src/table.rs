//! Generic record table editor
//!
//! Edits an ordered list of uniform records described by
//! [`Record::FIELDS`]. Every row-level or field-level change reports the
//! full updated list; the owner decides what to do with it.

use crate::error::TableError;
use vs_model::{FieldSpec, PhaseId, Record};

/// Text shown for an empty cell that is not being edited
pub const PLACEHOLDER: &str = "Click to edit";

/// Address of the cell in edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub key: &'static str,
}

/// How a cell renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView<'a> {
    /// Cell is in edit mode; the raw value (possibly empty)
    Editing(&'a str),
    /// Non-empty value
    Value(&'a str),
    /// Empty value, not being edited
    Placeholder,
}

impl CellView<'_> {
    /// Display text, substituting [`PLACEHOLDER`]
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            CellView::Editing(text) | CellView::Value(text) => text,
            CellView::Placeholder => PLACEHOLDER,
        }
    }
}

/// Rendered table: column schema plus one row of cells per record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid<'a> {
    pub columns: &'static [FieldSpec],
    pub rows: Vec<Vec<CellView<'a>>>,
}

/// Row-level and field-level table operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOp {
    AddRow,
    DeleteRow(usize),
    SetCell {
        row: usize,
        key: String,
        value: String,
    },
    Activate {
        row: usize,
        key: String,
    },
    Deactivate,
    EditActive(String),
}

/// Editor over one bound record list
#[derive(Debug, Clone)]
pub struct RecordTableEditor<R: Record> {
    key: PhaseId,
    rows: Vec<R>,
    editing: Option<CellRef>,
}

impl<R: Record> RecordTableEditor<R> {
    /// Bind to `rows`, owned by the phase `key`
    #[must_use]
    pub fn new(key: PhaseId, rows: Vec<R>) -> Self {
        Self {
            key,
            rows,
            editing: None,
        }
    }

    /// Bind a new record list
    ///
    /// A different `key` resets edit mode so edits never bleed into the
    /// newly bound list.
    pub fn rebind(&mut self, key: PhaseId, rows: Vec<R>) {
        if key != self.key {
            self.editing = None;
            self.key = key;
        }
        if self.editing.is_some_and(|cell| cell.row >= rows.len()) {
            self.editing = None;
        }
        self.rows = rows;
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> &'static [FieldSpec] {
        R::FIELDS
    }

    /// Cell currently in edit mode
    #[inline]
    #[must_use]
    pub fn editing(&self) -> Option<CellRef> {
        self.editing
    }

    /// Render one cell
    ///
    /// # Errors
    /// Returns error for an out-of-range row or unknown key
    pub fn cell(&self, row: usize, key: &str) -> Result<CellView<'_>, TableError> {
        let spec = Self::spec(key)?;
        let value = self.row(row)?.field(spec.key).unwrap_or_default();
        let editing = self
            .editing
            .is_some_and(|cell| cell.row == row && cell.key == spec.key);

        Ok(if editing {
            CellView::Editing(value)
        } else if value.is_empty() {
            CellView::Placeholder
        } else {
            CellView::Value(value)
        })
    }

    /// Render the whole table
    #[must_use]
    pub fn grid(&self) -> TableGrid<'_> {
        let rows = (0..self.rows.len())
            .map(|row| {
                R::FIELDS
                    .iter()
                    .map(|spec| self.cell(row, spec.key).unwrap_or(CellView::Placeholder))
                    .collect()
            })
            .collect();
        TableGrid {
            columns: R::FIELDS,
            rows,
        }
    }

    /// Put a cell into edit mode
    ///
    /// # Errors
    /// Returns error for an out-of-range row or unknown key
    pub fn activate(&mut self, row: usize, key: &str) -> Result<(), TableError> {
        let spec = Self::spec(key)?;
        self.row(row)?;
        self.editing = Some(CellRef { row, key: spec.key });
        Ok(())
    }

    /// Leave edit mode
    pub fn deactivate(&mut self) {
        self.editing = None;
    }

    /// Set one field of one record and report the full list
    ///
    /// # Errors
    /// Returns error for an out-of-range row or unknown key
    pub fn set_cell(
        &mut self,
        row: usize,
        key: &str,
        value: impl Into<String>,
    ) -> Result<Vec<R>, TableError> {
        let spec = Self::spec(key)?;
        let len = self.rows.len();
        let record = self
            .rows
            .get_mut(row)
            .ok_or(TableError::RowOutOfRange { row, len })?;
        record.set_field(spec.key, value);
        tracing::debug!(row, field = spec.key, "table cell edited");
        Ok(self.rows.clone())
    }

    /// Set the value of the cell in edit mode
    ///
    /// # Errors
    /// Returns [`TableError::NotEditing`] if no cell is in edit mode
    pub fn edit_active(&mut self, value: impl Into<String>) -> Result<Vec<R>, TableError> {
        let cell = self.editing.ok_or(TableError::NotEditing)?;
        self.set_cell(cell.row, cell.key, value)
    }

    /// Append a record with every field empty and report the full list
    pub fn add_row(&mut self) -> Vec<R> {
        self.rows.push(R::default());
        tracing::debug!(rows = self.rows.len(), "table row added");
        self.rows.clone()
    }

    /// Remove a record and report the full list
    ///
    /// Edit mode on the removed row clears; edit mode on a later row
    /// follows its record to the new position.
    ///
    /// # Errors
    /// Returns error for an out-of-range row
    pub fn delete_row(&mut self, index: usize) -> Result<Vec<R>, TableError> {
        self.row(index)?;
        self.rows.remove(index);
        self.editing = match self.editing {
            Some(cell) if cell.row == index => None,
            Some(cell) if cell.row > index => Some(CellRef {
                row: cell.row - 1,
                key: cell.key,
            }),
            other => other,
        };
        tracing::debug!(index, rows = self.rows.len(), "table row deleted");
        Ok(self.rows.clone())
    }

    /// Apply an operation; `Some` carries the reported list
    ///
    /// # Errors
    /// Propagates addressing errors from the individual operations
    pub fn apply(&mut self, op: TableOp) -> Result<Option<Vec<R>>, TableError> {
        match op {
            TableOp::AddRow => Ok(Some(self.add_row())),
            TableOp::DeleteRow(index) => self.delete_row(index).map(Some),
            TableOp::SetCell { row, key, value } => self.set_cell(row, &key, value).map(Some),
            TableOp::Activate { row, key } => self.activate(row, &key).map(|()| None),
            TableOp::Deactivate => {
                self.deactivate();
                Ok(None)
            }
            TableOp::EditActive(value) => self.edit_active(value).map(Some),
        }
    }

    fn row(&self, row: usize) -> Result<&R, TableError> {
        self.rows.get(row).ok_or(TableError::RowOutOfRange {
            row,
            len: self.rows.len(),
        })
    }

    fn spec(key: &str) -> Result<&'static FieldSpec, TableError> {
        R::FIELDS
            .iter()
            .find(|spec| spec.key == key)
            .ok_or_else(|| TableError::UnknownField(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vs_model::{CriteriaItem, InputItem};

    fn table() -> RecordTableEditor<InputItem> {
        RecordTableEditor::new(
            PhaseId(1),
            vec![
                InputItem::new("Brief", "PO"),
                InputItem::new("", ""),
                InputItem::new("Budget", "PMO"),
            ],
        )
    }

    #[test]
    fn empty_cell_renders_placeholder() {
        let t = table();
        assert_eq!(t.cell(1, "input").unwrap(), CellView::Placeholder);
        assert_eq!(t.cell(0, "producedBy").unwrap(), CellView::Value("PO"));
        assert_eq!(CellView::Placeholder.text(), PLACEHOLDER);
    }

    #[test]
    fn active_empty_cell_renders_editing() {
        let mut t = table();
        t.activate(1, "input").unwrap();
        assert_eq!(t.cell(1, "input").unwrap(), CellView::Editing(""));
        t.deactivate();
        assert_eq!(t.cell(1, "input").unwrap(), CellView::Placeholder);
    }

    #[test]
    fn add_row_defaults_every_field() {
        let mut t = RecordTableEditor::<CriteriaItem>::new(PhaseId(1), vec![]);
        let rows = t.add_row();
        assert_eq!(rows, vec![CriteriaItem::new("", "")]);
    }

    #[test]
    fn set_cell_reports_full_list() {
        let mut t = table();
        let rows = t.set_cell(2, "producedBy", "Finance").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], InputItem::new("Budget", "Finance"));
        assert_eq!(rows[0], InputItem::new("Brief", "PO"));
    }

    #[test]
    fn set_cell_rejects_bad_address() {
        let mut t = table();
        assert_eq!(
            t.set_cell(3, "input", "x").unwrap_err(),
            TableError::RowOutOfRange { row: 3, len: 3 }
        );
        assert_eq!(
            t.set_cell(0, "output", "x").unwrap_err(),
            TableError::UnknownField("output".to_string())
        );
    }

    #[test]
    fn edit_active_requires_edit_mode() {
        let mut t = table();
        assert_eq!(t.edit_active("x").unwrap_err(), TableError::NotEditing);
        t.activate(0, "input").unwrap();
        let rows = t.edit_active("Updated brief").unwrap();
        assert_eq!(rows[0].input, "Updated brief");
    }

    #[test]
    fn deleting_edited_row_clears_edit_mode() {
        let mut t = table();
        t.activate(1, "input").unwrap();
        let rows = t.delete_row(1).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(t.editing(), None);
    }

    #[test]
    fn deleting_earlier_row_shifts_edit_mode() {
        let mut t = table();
        t.activate(2, "input").unwrap();
        t.delete_row(0).unwrap();
        assert_eq!(t.editing(), Some(CellRef { row: 1, key: "input" }));
        assert_eq!(t.cell(1, "input").unwrap(), CellView::Editing("Budget"));
    }

    #[test]
    fn deleting_later_row_keeps_edit_mode() {
        let mut t = table();
        t.activate(0, "producedBy").unwrap();
        t.delete_row(2).unwrap();
        assert_eq!(t.editing(), Some(CellRef { row: 0, key: "producedBy" }));
    }

    #[test]
    fn rebind_to_other_phase_resets_edit_mode() {
        let mut t = table();
        t.activate(0, "input").unwrap();
        t.rebind(PhaseId(2), vec![InputItem::new("Other", "")]);
        assert_eq!(t.editing(), None);
        assert_eq!(t.edit_active("leak").unwrap_err(), TableError::NotEditing);
        assert_eq!(t.rows()[0].input, "Other");
    }

    #[test]
    fn rebind_same_phase_keeps_edit_mode() {
        let mut t = table();
        t.activate(0, "input").unwrap();
        let rows = t.set_cell(0, "input", "Brief v2").unwrap();
        t.rebind(PhaseId(1), rows);
        assert_eq!(t.cell(0, "input").unwrap(), CellView::Editing("Brief v2"));
    }

    #[test]
    fn grid_marks_editing_cell() {
        let mut t = table();
        t.activate(2, "producedBy").unwrap();
        let grid = t.grid();
        assert_eq!(grid.columns.len(), 2);
        assert_eq!(grid.rows[1], vec![CellView::Placeholder, CellView::Placeholder]);
        assert_eq!(grid.rows[2][1], CellView::Editing("PMO"));
    }

    #[test]
    fn apply_activate_reports_nothing() {
        let mut t = table();
        let reported = t
            .apply(TableOp::Activate {
                row: 0,
                key: "input".to_string(),
            })
            .unwrap();
        assert_eq!(reported, None);
        assert!(t.apply(TableOp::AddRow).unwrap().is_some());
    }
}
