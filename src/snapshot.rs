//! Read-only view of a session for the rendering surface
//!
//! The surface re-reads a snapshot after every message; nothing in here can
//! mutate the model.

use serde::Serialize;

use crate::grid::{DataRow, HeaderCell, HeaderKind};
use crate::model::{AppModel, EditTarget, PendingMenu};

/// Everything a renderer needs to draw the grid
#[derive(Debug, Clone, Serialize)]
pub struct GridSnapshot<'a> {
    pub header: &'a [HeaderCell],
    pub rows: &'a [DataRow],
    pub editing: EditTarget,
    pub menu: Option<PendingMenu>,
    pub highlight: Option<usize>,
    pub draft: &'a str,
    pub notice: Option<&'a str>,
}

impl<'a> GridSnapshot<'a> {
    pub fn new(model: &'a AppModel) -> Self {
        Self {
            header: model.table.column_headers(),
            rows: model.table.data_rows(),
            editing: model.editing.target(),
            menu: model.menu.pending().copied(),
            highlight: model.highlight.get(),
            draft: &model.ui.draft,
            notice: model.ui.notice.as_deref(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text layout, one grid row per line
    ///
    /// The highlighted row is prefixed with `*`, the edit target is wrapped
    /// in `[...]`, and line breaks inside cells are shown as ` / `.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let header_cells = self
            .header
            .iter()
            .enumerate()
            .map(|(col, h)| {
                let editing = self.is_header_target(HeaderKind::Column, col);
                self.decorate(&h.text, editing)
            });
        push_line(&mut out, ' ', 0, header_cells);

        for (i, row) in self.rows.iter().enumerate() {
            let r = i + 1;
            let marker = if self.highlight == Some(r) { '*' } else { ' ' };
            let label_editing = self.is_header_target(HeaderKind::Row, r);
            let label = self.decorate(&row.label.text, label_editing);
            let cells = row.cells.iter().enumerate().map(|(j, text)| {
                let editing = self.editing == EditTarget::Cell { row: r, col: j + 1 };
                self.decorate(text, editing)
            });
            push_line(&mut out, marker, r, std::iter::once(label).chain(cells));
        }

        if let Some(menu) = self.menu {
            let what = match menu.kind {
                HeaderKind::Row => "row",
                HeaderKind::Column => "column",
            };
            out.push_str(&format!(
                "menu: insert {} after {} at ({}, {})\n",
                what, menu.target, menu.position.x, menu.position.y
            ));
        }
        out
    }

    fn is_header_target(&self, kind: HeaderKind, index: usize) -> bool {
        self.editing == EditTarget::Header { kind, index }
    }

    fn decorate(&self, text: &str, editing: bool) -> String {
        let flat = text.replace('\n', " / ");
        if editing {
            format!("[{}]", flat)
        } else {
            flat
        }
    }
}

fn push_line(out: &mut String, marker: char, row: usize, cells: impl Iterator<Item = String>) {
    out.push(marker);
    out.push_str(&format!("{:>3} | ", row));
    out.push_str(&cells.collect::<Vec<_>>().join(" | "));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use crate::config::GridConfig;
    use crate::grid::{DataRow, HeaderCell, ScriptedSource, TableModel};
    use crate::model::AppModel;

    fn model() -> AppModel {
        let table = TableModel::from_parts(
            vec![HeaderCell::fixed("item"), HeaderCell::editable("a")],
            vec![
                DataRow::new(HeaderCell::fixed("r1"), vec!["x\ny".into()]),
                DataRow::new(HeaderCell::fixed("r2"), vec!["z".into()]),
            ],
        )
        .unwrap();
        AppModel::from_table(
            table,
            GridConfig::default(),
            Box::new(ScriptedSource::default()),
        )
    }

    #[test]
    fn test_text_layout_marks_highlight_and_edit() {
        let mut model = model();
        model.highlight.set(2);
        model.editing.begin_cell_edit(&model.table, 1, 1).unwrap();

        let text = model.snapshot().to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "   0 | item | a");
        assert_eq!(lines[1], "   1 | r1 | [x / y]");
        assert_eq!(lines[2], "*  2 | r2 | z");
    }

    #[test]
    fn test_json_contains_state() {
        let mut model = model();
        model.ui.set_notice("notice");
        let json = model.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["editing"]["state"], "none");
        assert_eq!(value["header"][1]["editable"], true);
        assert_eq!(value["rows"][0]["cells"][0], "x\ny");
        assert_eq!(value["notice"], "notice");
        assert!(value["menu"].is_null());
    }
}
