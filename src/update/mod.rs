//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each message is
//! handled to completion before the next one is accepted, so the surface
//! always observes a mutation before it can send another.

mod app;
mod edit;
mod entry;
mod grid;
mod menu;

use crate::commands::Cmd;
use crate::grid::TableError;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use edit::update_edit;
pub use entry::update_entry;
pub use grid::update_grid;
pub use menu::update_menu;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation and checks the
/// model invariants after every message.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Menu(m) => menu::update_menu(model, m),
        Msg::Entry(m) => entry::update_entry(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Turn a failed table operation into its user-visible outcome
///
/// Validation problems become a notice. Index errors are defects in the
/// caller: they are logged loudly and the message is dropped, leaving the
/// model unchanged.
pub(crate) fn report(model: &mut AppModel, err: TableError, operation: &str) -> Option<Cmd> {
    match err {
        TableError::Validation(reason) => {
            let notice = reason.to_string();
            tracing::warn!(operation, %notice, "rejected");
            model.ui.set_notice(notice.clone());
            Some(Cmd::ShowNotice(notice))
        }
        err => {
            tracing::error!(
                operation,
                error = %err,
                "invalid table address, operation aborted"
            );
            None
        }
    }
}

/// Traced update wrapper (debug builds only)
///
/// Logs the message, the resulting edit/menu transitions, and the table
/// shape change.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before_target = model.editing.target();
    let before_shape = (model.table.row_count(), model.table.column_count());
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after_target = model.editing.target();
    if before_target != after_target {
        debug!(
            target: "edit",
            from = ?before_target,
            to = ?after_target,
            "edit target changed"
        );
    }
    let after_shape = (model.table.row_count(), model.table.column_count());
    if before_shape != after_shape {
        debug!(
            target: "grid",
            from = ?before_shape,
            to = ?after_shape,
            "table shape changed"
        );
    }

    model.assert_invariants_with_context(&msg_name);
    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Edit::BeginCell { row: 1, col: 2 }`
/// - `Menu::ConfirmInsertRow`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Menu(m) => format!("Menu::{:?}", m),
        Msg::Entry(m) => format!("Entry::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
