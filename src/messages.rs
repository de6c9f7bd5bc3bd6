//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. A rendering surface
//! translates its pointer/keyboard/text events into messages and re-reads
//! the snapshot after each one.

use crate::grid::HeaderKind;
use crate::model::ScreenPosition;

/// Direct value writes (text-input change events)
///
/// A write is only applied while its target is the active edit target.
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    /// New text for the data cell being edited
    SetCell { row: usize, col: usize, text: String },
    /// New text for the header being edited
    SetHeaderText {
        kind: HeaderKind,
        index: usize,
        text: String,
    },
}

/// Edit-mode transitions
#[derive(Debug, Clone, PartialEq)]
pub enum EditMsg {
    /// Double-click on a data cell
    BeginCell { row: usize, col: usize },
    /// Double-click on a column header or row label
    BeginHeader { kind: HeaderKind, index: usize },
    /// Text typed into whatever is being edited
    Input(String),
    /// The edit surface lost focus
    End,
}

/// Context menu interaction
#[derive(Debug, Clone, PartialEq)]
pub enum MenuMsg {
    /// Right-click on a row label or column header
    Open {
        kind: HeaderKind,
        target: usize,
        position: ScreenPosition,
    },
    /// Close the menu
    Close,
    /// A click anywhere outside the menu's own actions
    DismissOutside,
    /// "Add row" action
    ConfirmInsertRow,
    /// "Add column" action
    ConfirmInsertColumn,
}

/// New change point entry form
#[derive(Debug, Clone, PartialEq)]
pub enum EntryMsg {
    /// Input field changed
    SetDraft(String),
    /// Add the draft as a change point, clearing it on success
    Submit,
    /// Add a change point with an explicit label
    Add(String),
}

/// Session-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Re-seed the table and clear all transient state
    Reset,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Value writes
    Grid(GridMsg),
    /// Edit-mode transitions
    Edit(EditMsg),
    /// Context menu
    Menu(MenuMsg),
    /// Entry form
    Entry(EntryMsg),
    /// Session
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Double-click on a data cell
    pub fn begin_cell(row: usize, col: usize) -> Self {
        Msg::Edit(EditMsg::BeginCell { row, col })
    }

    /// Double-click on a header
    pub fn begin_header(kind: HeaderKind, index: usize) -> Self {
        Msg::Edit(EditMsg::BeginHeader { kind, index })
    }

    /// Blur of the edit surface
    pub fn end_edit() -> Self {
        Msg::Edit(EditMsg::End)
    }

    /// Right-click on a header
    pub fn open_menu(kind: HeaderKind, target: usize, x: f32, y: f32) -> Self {
        Msg::Menu(MenuMsg::Open {
            kind,
            target,
            position: ScreenPosition::new(x, y),
        })
    }

    /// Add a change point with the given label
    pub fn add_change_point(label: impl Into<String>) -> Self {
        Msg::Entry(EntryMsg::Add(label.into()))
    }
}
