//! Grid data model
//!
//! The table itself and everything that produces table contents:
//! - `TableModel` with cell/header writes and row/column insertion
//! - Seed data for a fresh session
//! - Injectable randomness shared by seeding and random entry placement
//!
//! # Addressing
//!
//! ```text
//!            col 0        col 1        col 2
//! row 0    [ corner ] [ header 1 ] [ header 2 ]   <- HeaderCell
//! row 1    [ label  ] [  text    ] [  text    ]
//! row 2    [ label  ] [  text    ] [  text    ]
//!              ^ HeaderCell (row label)
//! ```

mod error;
mod model;
mod random;
pub mod seed;

pub use error::{Axis, TableError, ValidationError};
pub use model::{
    DataRow, HeaderCell, HeaderKind, Placeholders, TableModel, DEFAULT_COLUMN_LABEL,
    DEFAULT_ROW_LABEL,
};
pub use random::{RandomSource, RngSource, ScriptedSource};
