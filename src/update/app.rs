//! Session-level handlers

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle session messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Reset => {
            model.reset();
            Some(Cmd::Redraw)
        }
    }
}
