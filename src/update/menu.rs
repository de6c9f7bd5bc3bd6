//! Context menu handlers
//!
//! Confirming an insertion reconciles the trackers with the shifted grid and
//! then puts the new header into edit mode so it can be named right away.

use crate::commands::Cmd;
use crate::grid::HeaderKind;
use crate::messages::MenuMsg;
use crate::model::AppModel;

/// Handle context menu messages
pub fn update_menu(model: &mut AppModel, msg: MenuMsg) -> Option<Cmd> {
    match msg {
        MenuMsg::Open {
            kind,
            target,
            position,
        } => {
            model.menu.open(kind, target, position);
            Some(Cmd::Redraw)
        }
        MenuMsg::Close => model.menu.close().map(|_| Cmd::Redraw),
        MenuMsg::DismissOutside => model.menu.dismiss_outside().then_some(Cmd::Redraw),
        MenuMsg::ConfirmInsertRow => confirm_insert_row(model),
        MenuMsg::ConfirmInsertColumn => confirm_insert_column(model),
    }
}

fn confirm_insert_row(model: &mut AppModel) -> Option<Cmd> {
    match model.menu.confirm_insert_row(&mut model.table) {
        Ok(Some(row)) => {
            model.rows_inserted(row);
            name_new_header(model, HeaderKind::Row, row)
        }
        Ok(None) => None,
        Err(e) => super::report(model, e, "insert_row"),
    }
}

fn confirm_insert_column(model: &mut AppModel) -> Option<Cmd> {
    match model.menu.confirm_insert_column(&mut model.table) {
        Ok(Some(col)) => {
            model.column_inserted(col);
            name_new_header(model, HeaderKind::Column, col)
        }
        Ok(None) => None,
        Err(e) => super::report(model, e, "insert_column"),
    }
}

/// Enter edit mode on a freshly inserted (always editable) header
fn name_new_header(model: &mut AppModel, kind: HeaderKind, index: usize) -> Option<Cmd> {
    match model.editing.begin_header_edit(&model.table, kind, index) {
        Ok(true) => {}
        Ok(false) => tracing::warn!(?kind, index, "inserted header is not editable"),
        Err(e) => return super::report(model, e, "begin_header_edit"),
    }
    Some(Cmd::Redraw)
}
