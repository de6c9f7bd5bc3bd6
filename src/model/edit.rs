//! Edit session - which single cell or header is in edit mode

use serde::Serialize;

use crate::grid::{HeaderKind, TableError, TableModel};

/// The unit currently in edit mode
///
/// A single tagged value, so two edit sessions can never coexist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditTarget {
    #[default]
    None,
    /// A data cell (`row >= 1, col >= 1`)
    Cell { row: usize, col: usize },
    /// A column header or row label
    Header { kind: HeaderKind, index: usize },
}

impl EditTarget {
    pub fn is_none(&self) -> bool {
        matches!(self, EditTarget::None)
    }
}

/// Tracks the active edit target and enforces entry/exit transitions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    target: EditTarget,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> EditTarget {
        self.target
    }

    pub fn is_editing(&self) -> bool {
        !self.target.is_none()
    }

    pub fn is_editing_cell(&self, row: usize, col: usize) -> bool {
        self.target == EditTarget::Cell { row, col }
    }

    pub fn is_editing_header(&self, kind: HeaderKind, index: usize) -> bool {
        self.target == EditTarget::Header { kind, index }
    }

    /// Enter edit mode on a data cell, replacing whatever was active
    ///
    /// Fails (without a transition) if the address is not a data cell.
    pub fn begin_cell_edit(
        &mut self,
        table: &TableModel,
        row: usize,
        col: usize,
    ) -> Result<(), TableError> {
        table.cell(row, col)?;
        self.transition(EditTarget::Cell { row, col });
        Ok(())
    }

    /// Enter edit mode on a header if it is editable
    ///
    /// Returns `Ok(false)` and leaves the session untouched for a
    /// non-editable header.
    pub fn begin_header_edit(
        &mut self,
        table: &TableModel,
        kind: HeaderKind,
        index: usize,
    ) -> Result<bool, TableError> {
        if !table.is_header_editable(kind, index)? {
            tracing::debug!(?kind, index, "header is not editable, ignoring");
            return Ok(false);
        }
        self.transition(EditTarget::Header { kind, index });
        Ok(true)
    }

    /// Leave edit mode (blur), returning the target that was active
    pub fn end_edit(&mut self) -> EditTarget {
        let previous = std::mem::take(&mut self.target);
        if !previous.is_none() {
            tracing::debug!(?previous, "edit ended");
        }
        previous
    }

    /// Re-point the target after a row was inserted at `at`
    pub fn rows_inserted(&mut self, at: usize) {
        match &mut self.target {
            EditTarget::Cell { row, .. } if *row >= at => *row += 1,
            EditTarget::Header {
                kind: HeaderKind::Row,
                index,
            } if *index >= at => *index += 1,
            _ => return,
        }
        tracing::debug!(target = ?self.target, "edit target shifted by row insert");
    }

    /// Re-point the target after a column was inserted at `at`
    pub fn column_inserted(&mut self, at: usize) {
        match &mut self.target {
            EditTarget::Cell { col, .. } if *col >= at => *col += 1,
            EditTarget::Header {
                kind: HeaderKind::Column,
                index,
            } if *index >= at => *index += 1,
            _ => return,
        }
        tracing::debug!(target = ?self.target, "edit target shifted by column insert");
    }

    fn transition(&mut self, next: EditTarget) {
        if self.target != next {
            tracing::debug!(from = ?self.target, to = ?next, "edit target changed");
        }
        self.target = next;
    }
}
