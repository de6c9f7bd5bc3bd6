//! Application model - the complete state of one grid session
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. The table is the single source of truth; the trackers hold
//! indices into the live table and are reconciled after every structural
//! change.

pub mod edit;
pub mod highlight;
pub mod insertion;
pub mod menu;
pub mod ui;

pub use edit::{EditSession, EditTarget};
pub use highlight::HighlightTracker;
pub use insertion::{Insertion, RandomInsertionEngine};
pub use menu::{ContextMenu, PendingMenu, ScreenPosition};
pub use ui::UiState;

use crate::config::GridConfig;
use crate::grid::{seed, RandomSource, RngSource, TableModel};
use crate::snapshot::GridSnapshot;

/// The complete session model
#[derive(Debug)]
pub struct AppModel {
    /// The grid
    pub table: TableModel,
    /// Active cell/header edit
    pub editing: EditSession,
    /// Pending context menu
    pub menu: ContextMenu,
    /// Most recently injected row
    pub highlight: HighlightTracker,
    /// Random change point placement (owns the session's random source)
    pub engine: RandomInsertionEngine,
    /// Entry draft and notices
    pub ui: UiState,
    /// Loaded configuration
    pub config: GridConfig,
}

impl AppModel {
    /// Create a seeded session using the configured seed, or entropy
    pub fn new(config: GridConfig) -> Self {
        let source: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::from_entropy()),
        };
        Self::with_source(config, source)
    }

    /// Create a seeded session drawing from `source`
    pub fn with_source(config: GridConfig, mut source: Box<dyn RandomSource>) -> Self {
        let table = seed::generate(source.as_mut(), config.placeholders());
        Self::from_table(table, config, source)
    }

    /// Create a session around an existing table
    pub fn from_table(
        table: TableModel,
        config: GridConfig,
        source: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            table,
            editing: EditSession::new(),
            menu: ContextMenu::new(),
            highlight: HighlightTracker::new(),
            engine: RandomInsertionEngine::new(source),
            ui: UiState::new(),
            config,
        }
    }

    /// Re-seed the table and clear every derived tracker
    pub fn reset(&mut self) {
        let placeholders = self.config.placeholders();
        self.table = seed::generate(self.engine.source_mut(), placeholders);
        self.editing = EditSession::new();
        self.menu = ContextMenu::new();
        self.highlight.clear();
        self.ui = UiState::new();
        tracing::info!("table reset");
    }

    /// Reconcile trackers after a row was inserted at `at`
    pub fn rows_inserted(&mut self, at: usize) {
        self.editing.rows_inserted(at);
        self.highlight.rows_inserted(at);
        self.menu.close();
    }

    /// Reconcile trackers after a column was inserted at `at`
    pub fn column_inserted(&mut self, at: usize) {
        self.editing.column_inserted(at);
        self.menu.close();
    }

    /// Read-only view for the rendering surface
    pub fn snapshot(&self) -> GridSnapshot<'_> {
        GridSnapshot::new(self)
    }

    /// Check cross-component invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        self.table.assert_invariants();
        match self.editing.target() {
            EditTarget::None => {}
            EditTarget::Cell { row, col } => {
                debug_assert!(
                    self.table.cell(row, col).is_ok(),
                    "Edit target ({}, {}) must be a data cell",
                    row,
                    col
                );
            }
            EditTarget::Header { kind, index } => {
                debug_assert!(
                    self.table.is_header_editable(kind, index).unwrap_or(false),
                    "Edit target {:?} {} must be an editable header",
                    kind,
                    index
                );
            }
        }
        if let Some(row) = self.highlight.get() {
            debug_assert!(
                row >= 1 && row < self.table.row_count(),
                "Highlight {} must be a data row",
                row
            );
        }
    }

    /// Check invariants with context about what operation just occurred
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        tracing::trace!(context, "checking model invariants");
        self.assert_invariants();
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
