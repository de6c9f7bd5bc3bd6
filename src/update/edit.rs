//! Edit-mode transition handlers

use crate::commands::Cmd;
use crate::messages::EditMsg;
use crate::model::{AppModel, EditTarget};

/// Handle edit-mode messages
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::BeginCell { row, col } => {
            match model.editing.begin_cell_edit(&model.table, row, col) {
                Ok(()) => Some(Cmd::Redraw),
                Err(e) => super::report(model, e, "begin_cell_edit"),
            }
        }
        EditMsg::BeginHeader { kind, index } => {
            match model.editing.begin_header_edit(&model.table, kind, index) {
                Ok(true) => Some(Cmd::Redraw),
                Ok(false) => None,
                Err(e) => super::report(model, e, "begin_header_edit"),
            }
        }
        EditMsg::Input(text) => match model.editing.target() {
            EditTarget::Cell { row, col } => super::grid::set_cell(model, row, col, text),
            EditTarget::Header { kind, index } => {
                super::grid::set_header_text(model, kind, index, text)
            }
            EditTarget::None => {
                tracing::debug!("nothing in edit mode, ignoring input");
                None
            }
        },
        EditMsg::End => {
            if model.editing.end_edit().is_none() {
                None
            } else {
                Some(Cmd::Redraw)
            }
        }
    }
}
