//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use impactgrid::config::GridConfig;
use impactgrid::grid::{DataRow, HeaderCell, RngSource, ScriptedSource, TableModel};
use impactgrid::model::AppModel;
use impactgrid::script::parse_script;
use impactgrid::update::update;
use impactgrid::{Cmd, Msg};

/// Seed-table model whose change points always copy data row `source_row`
///
/// Every seeded cell reads "影響なし" because the scripted source never
/// flips heads.
pub fn test_model(source_row: usize) -> AppModel {
    AppModel::with_source(
        GridConfig::default(),
        Box::new(ScriptedSource::fixed(source_row.saturating_sub(1))),
    )
}

/// Seed-table model drawing from a seeded RNG
pub fn seeded_model(seed: u64) -> AppModel {
    AppModel::with_source(GridConfig::default(), Box::new(RngSource::seeded(seed)))
}

/// A `rows` x `cols` data table with cells named `r{row}c{col}`
///
/// Headers are `corner`, `h1..`, row labels `r1..`, all fixed.
pub fn small_table(rows: usize, cols: usize) -> TableModel {
    let header = std::iter::once(HeaderCell::fixed("corner"))
        .chain((1..=cols).map(|c| HeaderCell::fixed(format!("h{}", c))))
        .collect();
    let data = (1..=rows)
        .map(|r| {
            DataRow::new(
                HeaderCell::fixed(format!("r{}", r)),
                (1..=cols).map(|c| format!("r{}c{}", r, c)).collect(),
            )
        })
        .collect();
    TableModel::from_parts(header, data).unwrap()
}

/// Model around [`small_table`] whose change points copy data row `source_row`
pub fn small_model(rows: usize, cols: usize, source_row: usize) -> AppModel {
    AppModel::from_table(
        small_table(rows, cols),
        GridConfig::default(),
        Box::new(ScriptedSource::fixed(source_row.saturating_sub(1))),
    )
}

/// Apply messages in order, collecting the commands they produced
pub fn apply(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) -> Vec<Cmd> {
    msgs.into_iter()
        .map(|msg| Cmd::from(update(model, msg)))
        .collect()
}

/// Run a command script, returning every notice raised
pub fn run_script(model: &mut AppModel, script: &str) -> Vec<String> {
    let msgs = parse_script(script).unwrap();
    apply(model, msgs)
        .iter()
        .filter_map(|cmd| cmd.notice().map(str::to_string))
        .collect()
}

/// Row labels in grid order, excluding the corner
pub fn row_labels(model: &AppModel) -> Vec<String> {
    model
        .table
        .data_rows()
        .iter()
        .map(|row| row.label.text.clone())
        .collect()
}

/// Column header texts, corner first
pub fn column_labels(model: &AppModel) -> Vec<String> {
    model
        .table
        .column_headers()
        .iter()
        .map(|h| h.text.clone())
        .collect()
}
