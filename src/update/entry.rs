//! New change point entry handlers

use crate::commands::Cmd;
use crate::grid::TableError;
use crate::messages::EntryMsg;
use crate::model::{AppModel, Insertion};

/// Handle entry form messages
pub fn update_entry(model: &mut AppModel, msg: EntryMsg) -> Option<Cmd> {
    match msg {
        EntryMsg::SetDraft(text) => {
            model.ui.set_draft(text);
            Some(Cmd::Redraw)
        }
        EntryMsg::Submit => {
            let label = model.ui.draft.clone();
            match add_change_point(model, &label) {
                Ok(_) => {
                    model.ui.take_draft();
                    Some(Cmd::Redraw)
                }
                Err(e) => super::report(model, e, "add_change_point"),
            }
        }
        EntryMsg::Add(label) => match add_change_point(model, &label) {
            Ok(_) => Some(Cmd::Redraw),
            Err(e) => super::report(model, e, "add_change_point"),
        },
    }
}

fn add_change_point(model: &mut AppModel, label: &str) -> Result<Insertion, TableError> {
    let insertion = model
        .engine
        .add_change_point(&mut model.table, &mut model.highlight, label)?;

    // The highlight already names the new row; only the edit target and
    // menu still refer to pre-insert indices.
    model.editing.rows_inserted(insertion.new_row);
    model.menu.close();
    model.ui.clear_notice();
    Ok(insertion)
}
