//! Table data model
//!
//! Row 0 is the header row, column 0 of every data row is the row label.
//! Both are `HeaderCell`s; everything at `r >= 1, c >= 1` is plain text.
//!
//! Storage splits the header row from the data rows so the cell types are
//! structural rather than a runtime convention:
//!
//! ```text
//! header: [corner, col 1, col 2, ...]          (HeaderCell)
//! rows:   [label, cell 1, cell 2, ...]         (HeaderCell + String)
//! ```
//!
//! Every data row holds exactly `column_count() - 1` cells.

use serde::{Deserialize, Serialize};

use super::error::TableError;

/// Placeholder label for rows created via insertion
pub const DEFAULT_ROW_LABEL: &str = "新しい性能変化点";

/// Placeholder label for columns created via insertion
pub const DEFAULT_COLUMN_LABEL: &str = "新しい影響観点";

/// A column header or row label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub text: String,
    /// Only editable headers may enter edit mode
    pub editable: bool,
}

impl HeaderCell {
    /// A header produced by seeding (not renameable)
    pub fn fixed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            editable: false,
        }
    }

    /// A header produced by insertion (renameable)
    pub fn editable(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            editable: true,
        }
    }
}

/// Which header axis an address refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderKind {
    /// Row label at `row[index][0]`
    Row,
    /// Column header at `row[0][index]`
    Column,
}

/// One data row: a label followed by the data cells (columns 1..)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRow {
    pub label: HeaderCell,
    pub cells: Vec<String>,
}

impl DataRow {
    pub fn new(label: HeaderCell, cells: Vec<String>) -> Self {
        Self { label, cells }
    }

    /// Label plus `width` empty cells
    pub fn blank(label: HeaderCell, width: usize) -> Self {
        Self {
            label,
            cells: vec![String::new(); width],
        }
    }
}

/// Labels given to headers created by insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub row_label: String,
    pub column_label: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            row_label: DEFAULT_ROW_LABEL.to_string(),
            column_label: DEFAULT_COLUMN_LABEL.to_string(),
        }
    }
}

/// The grid and its mutation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    /// Header row; `header[0]` is the corner cell
    header: Vec<HeaderCell>,
    /// Data rows; grid row `r` lives at `rows[r - 1]`
    rows: Vec<DataRow>,
    placeholders: Placeholders,
}

impl TableModel {
    /// Create a table holding only the corner header
    pub fn new(corner: HeaderCell) -> Self {
        Self {
            header: vec![corner],
            rows: Vec::new(),
            placeholders: Placeholders::default(),
        }
    }

    /// Build a table from a header row and data rows
    ///
    /// Fails if the header row is empty or any data row has the wrong width.
    pub fn from_parts(header: Vec<HeaderCell>, rows: Vec<DataRow>) -> Result<Self, TableError> {
        if header.is_empty() {
            return Err(TableError::column(0, 0, 0));
        }
        let width = header.len() - 1;
        for (i, row) in rows.iter().enumerate() {
            if row.cells.len() != width {
                return Err(TableError::Ragged {
                    row: i + 1,
                    expected: width,
                    found: row.cells.len(),
                });
            }
        }
        Ok(Self {
            header,
            rows,
            placeholders: Placeholders::default(),
        })
    }

    /// Replace the labels used for inserted rows and columns
    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Number of rows including the header row
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Number of rows excluding the header row
    pub fn data_row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns including the label column
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// The header row, corner first
    pub fn column_headers(&self) -> &[HeaderCell] {
        &self.header
    }

    /// The data rows in grid order (grid row `r` is element `r - 1`)
    pub fn data_rows(&self) -> &[DataRow] {
        &self.rows
    }

    /// Data row at grid index `row` (`row >= 1`)
    pub fn data_row(&self, row: usize) -> Result<&DataRow, TableError> {
        let idx = self.data_index(row)?;
        Ok(&self.rows[idx])
    }

    /// Header addressed by kind and index
    ///
    /// `(Row, 0)` and `(Column, 0)` both address the corner cell.
    pub fn header(&self, kind: HeaderKind, index: usize) -> Result<&HeaderCell, TableError> {
        match kind {
            HeaderKind::Column => self
                .header
                .get(index)
                .ok_or_else(|| TableError::column(index, 0, self.header.len())),
            HeaderKind::Row if index == 0 => Ok(&self.header[0]),
            HeaderKind::Row => self
                .rows
                .get(index - 1)
                .map(|row| &row.label)
                .ok_or_else(|| TableError::row(index, 0, self.row_count())),
        }
    }

    fn header_mut(
        &mut self,
        kind: HeaderKind,
        index: usize,
    ) -> Result<&mut HeaderCell, TableError> {
        let row_count = self.row_count();
        let column_count = self.column_count();
        match kind {
            HeaderKind::Column => self
                .header
                .get_mut(index)
                .ok_or_else(|| TableError::column(index, 0, column_count)),
            HeaderKind::Row if index == 0 => Ok(&mut self.header[0]),
            HeaderKind::Row => self
                .rows
                .get_mut(index - 1)
                .map(|row| &mut row.label)
                .ok_or_else(|| TableError::row(index, 0, row_count)),
        }
    }

    /// Text of the data cell at `(row, col)`, both `>= 1`
    pub fn cell(&self, row: usize, col: usize) -> Result<&str, TableError> {
        let (r, c) = self.cell_index(row, col)?;
        Ok(&self.rows[r].cells[c])
    }

    /// Replace the text of the data cell at `(row, col)`
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        text: impl Into<String>,
    ) -> Result<(), TableError> {
        let (r, c) = self.cell_index(row, col)?;
        self.rows[r].cells[c] = text.into();
        Ok(())
    }

    /// Replace the text of a header, regardless of its editable flag
    pub fn set_header_text(
        &mut self,
        kind: HeaderKind,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), TableError> {
        self.header_mut(kind, index)?.text = text.into();
        Ok(())
    }

    /// Whether the addressed header may enter edit mode
    pub fn is_header_editable(&self, kind: HeaderKind, index: usize) -> Result<bool, TableError> {
        self.header(kind, index).map(|h| h.editable)
    }

    /// Insert a blank row after `after`, returning the new row's index
    ///
    /// The new row gets an editable placeholder label and empty cells.
    /// Rows at `after + 1` and beyond move down by one.
    pub fn insert_row(&mut self, after: usize) -> Result<usize, TableError> {
        let row = DataRow::blank(
            HeaderCell::editable(self.placeholders.row_label.clone()),
            self.column_count() - 1,
        );
        self.insert_data_row(after, row)
    }

    /// Insert a fully populated row after `after`, returning its index
    pub fn insert_data_row(&mut self, after: usize, row: DataRow) -> Result<usize, TableError> {
        if after >= self.row_count() {
            return Err(TableError::row(after, 0, self.row_count()));
        }
        let width = self.column_count() - 1;
        if row.cells.len() != width {
            return Err(TableError::Ragged {
                row: after + 1,
                expected: width,
                found: row.cells.len(),
            });
        }

        let new_index = after + 1;
        self.rows.insert(new_index - 1, row);
        tracing::info!(row = new_index, rows = self.row_count(), "inserted row");
        Ok(new_index)
    }

    /// Insert a column after `after` in every row, returning its index
    ///
    /// The header row gets an editable placeholder; data rows get an empty
    /// cell. Bounds are checked before any row is touched.
    pub fn insert_column(&mut self, after: usize) -> Result<usize, TableError> {
        if after >= self.column_count() {
            return Err(TableError::column(after, 0, self.column_count()));
        }

        let new_index = after + 1;
        self.header.insert(
            new_index,
            HeaderCell::editable(self.placeholders.column_label.clone()),
        );
        for row in &mut self.rows {
            // Data cells start at column 1, so grid column c is cells[c - 1]
            row.cells.insert(new_index - 1, String::new());
        }
        tracing::info!(
            column = new_index,
            columns = self.column_count(),
            "inserted column"
        );
        Ok(new_index)
    }

    /// Check the uniform-width invariant (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        debug_assert!(!self.header.is_empty(), "Header row must hold the corner cell");
        let width = self.header.len() - 1;
        for (i, row) in self.rows.iter().enumerate() {
            debug_assert_eq!(
                row.cells.len(),
                width,
                "Row {} must have {} data cells",
                i + 1,
                width
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}

    fn data_index(&self, row: usize) -> Result<usize, TableError> {
        if row == 0 || row >= self.row_count() {
            return Err(TableError::row(row, 1, self.row_count()));
        }
        Ok(row - 1)
    }

    fn cell_index(&self, row: usize, col: usize) -> Result<(usize, usize), TableError> {
        let r = self.data_index(row)?;
        if col == 0 || col >= self.column_count() {
            return Err(TableError::column(col, 1, self.column_count()));
        }
        Ok((r, col - 1))
    }
}
