//! Error types for grid operations

use thiserror::Error;

/// Which axis an out-of-bounds index was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// User-correctable rejection of a new entry
///
/// The `Display` text is what the user sees in the blocking notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Label is empty or whitespace only
    #[error("新たな変化点を入力してください。")]
    EmptyLabel,
    /// Only the header row exists, so there is no row to derive from
    #[error("データ行がありません。")]
    NoDataRows,
}

/// Errors returned by table operations
///
/// Operations validate before they mutate, so an error always means the
/// grid is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Out-of-bounds access, or a header address where a data cell is required
    #[error("{axis} index {index} out of bounds (valid range {min}..{len})")]
    Index {
        axis: Axis,
        index: usize,
        min: usize,
        len: usize,
    },
    /// A row whose width does not match the header row
    #[error("row {row} has {found} data cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl TableError {
    pub(crate) fn row(index: usize, min: usize, len: usize) -> Self {
        TableError::Index {
            axis: Axis::Row,
            index,
            min,
            len,
        }
    }

    pub(crate) fn column(index: usize, min: usize, len: usize) -> Self {
        TableError::Index {
            axis: Axis::Column,
            index,
            min,
            len,
        }
    }

    /// True for programming defects (as opposed to user input problems)
    pub fn is_index(&self) -> bool {
        matches!(self, TableError::Index { .. } | TableError::Ragged { .. })
    }
}
