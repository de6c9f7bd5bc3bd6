//! Impact grid - Elm-style editable grid core
//!
//! This crate provides the state and update logic behind a spreadsheet-like
//! "change point × impact viewpoint" grid: cell and header editing, a
//! right-click insert menu, and random change point injection with a
//! highlight on the injected row.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod messages;
pub mod model;
pub mod script;
pub mod snapshot;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use grid::TableModel;
pub use messages::Msg;
pub use model::AppModel;
pub use update::update;
