//! Context menu - pending row/column insertion target
//!
//! The menu only records what was right-clicked and where. Any input
//! device can drive it; the rendering surface positions a floating menu
//! from `PendingMenu::position` and reports outside clicks through
//! `dismiss_outside`.

use serde::Serialize;

use crate::grid::{HeaderKind, TableError, TableModel};

/// Page coordinates of the context-menu request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScreenPosition {
    pub x: f32,
    pub y: f32,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An open, unconsumed context menu
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PendingMenu {
    /// Row menus insert rows, column menus insert columns
    pub kind: HeaderKind,
    /// Insertion happens right after this index
    pub target: usize,
    pub position: ScreenPosition,
}

/// Tracks menu visibility and the pending insertion target
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenu {
    pending: Option<PendingMenu>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&PendingMenu> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Open a menu, replacing any menu already pending
    pub fn open(&mut self, kind: HeaderKind, target: usize, position: ScreenPosition) {
        self.pending = Some(PendingMenu {
            kind,
            target,
            position,
        });
        tracing::debug!(?kind, target, x = position.x, y = position.y, "menu opened");
    }

    /// Close the menu, returning what was pending
    pub fn close(&mut self) -> Option<PendingMenu> {
        self.pending.take()
    }

    /// Close the menu because of an interaction outside of it
    pub fn dismiss_outside(&mut self) -> bool {
        let dismissed = self.close().is_some();
        if dismissed {
            tracing::debug!("menu dismissed by outside click");
        }
        dismissed
    }

    /// Insert a row after the pending row target and close the menu
    ///
    /// Returns `Ok(None)` without touching anything when no row menu is
    /// pending. On error the menu stays open and the table is unchanged.
    pub fn confirm_insert_row(
        &mut self,
        table: &mut TableModel,
    ) -> Result<Option<usize>, TableError> {
        self.confirm(HeaderKind::Row, |target| table.insert_row(target))
    }

    /// Insert a column after the pending column target and close the menu
    pub fn confirm_insert_column(
        &mut self,
        table: &mut TableModel,
    ) -> Result<Option<usize>, TableError> {
        self.confirm(HeaderKind::Column, |target| table.insert_column(target))
    }

    fn confirm(
        &mut self,
        kind: HeaderKind,
        insert: impl FnOnce(usize) -> Result<usize, TableError>,
    ) -> Result<Option<usize>, TableError> {
        let Some(pending) = self.pending.filter(|p| p.kind == kind) else {
            tracing::debug!(
                ?kind,
                pending = ?self.pending,
                "no matching menu, ignoring confirm"
            );
            return Ok(None);
        };
        let new_index = insert(pending.target)?;
        self.close();
        Ok(Some(new_index))
    }
}
