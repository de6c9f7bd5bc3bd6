//! Random insertion of new change points
//!
//! A newly reported change point is provisionally attached next to one
//! randomly chosen existing entry, inheriting that entry's assessments, and
//! highlighted so the user reviews it.

use crate::grid::{DataRow, HeaderCell, RandomSource, TableError, TableModel, ValidationError};

use super::highlight::HighlightTracker;

/// Where a change point was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// Row whose cells were copied
    pub source_row: usize,
    /// Index of the new row (`source_row + 1`)
    pub new_row: usize,
}

/// Injects labelled rows next to a randomly selected data row
#[derive(Debug)]
pub struct RandomInsertionEngine {
    source: Box<dyn RandomSource>,
}

impl RandomInsertionEngine {
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// The random source, shared with re-seeding
    pub fn source_mut(&mut self) -> &mut dyn RandomSource {
        self.source.as_mut()
    }

    /// Add a change point labelled `label`
    ///
    /// Fails with a validation error (table untouched) for a blank label or
    /// a table without data rows. On success the new row is highlighted.
    pub fn add_change_point(
        &mut self,
        table: &mut TableModel,
        highlight: &mut HighlightTracker,
        label: &str,
    ) -> Result<Insertion, TableError> {
        if label.trim().is_empty() {
            return Err(ValidationError::EmptyLabel.into());
        }
        let data_rows = table.data_row_count();
        if data_rows == 0 {
            return Err(ValidationError::NoDataRows.into());
        }

        let source_row = self.source.index(data_rows) + 1;
        let cells = table.data_row(source_row)?.cells.clone();
        let row = DataRow::new(HeaderCell::editable(label), cells);
        let new_row = table.insert_data_row(source_row, row)?;
        highlight.set(new_row);

        tracing::info!(source_row, new_row, label, "added change point");
        Ok(Insertion {
            source_row,
            new_row,
        })
    }
}
