//! Value write handlers
//!
//! Writes arrive from the edit surface's change events and are only applied
//! to the unit that is currently in edit mode.

use crate::commands::Cmd;
use crate::grid::HeaderKind;
use crate::messages::GridMsg;
use crate::model::AppModel;

/// Handle value write messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    match msg {
        GridMsg::SetCell { row, col, text } => set_cell(model, row, col, text),
        GridMsg::SetHeaderText { kind, index, text } => set_header_text(model, kind, index, text),
    }
}

pub(super) fn set_cell(model: &mut AppModel, row: usize, col: usize, text: String) -> Option<Cmd> {
    if !model.editing.is_editing_cell(row, col) {
        tracing::debug!(row, col, "cell is not in edit mode, ignoring write");
        return None;
    }
    match model.table.set_cell(row, col, text) {
        Ok(()) => Some(Cmd::Redraw),
        Err(e) => super::report(model, e, "set_cell"),
    }
}

pub(super) fn set_header_text(
    model: &mut AppModel,
    kind: HeaderKind,
    index: usize,
    text: String,
) -> Option<Cmd> {
    if !model.editing.is_editing_header(kind, index) {
        tracing::debug!(?kind, index, "header is not in edit mode, ignoring write");
        return None;
    }
    match model.table.set_header_text(kind, index, text) {
        Ok(()) => Some(Cmd::Redraw),
        Err(e) => super::report(model, e, "set_header_text"),
    }
}
