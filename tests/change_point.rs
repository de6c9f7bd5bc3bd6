//! Change point injection tests
//!
//! Tests for random placement, validation notices, the entry draft and
//! the highlight of the injected row.

mod common;

use common::{apply, row_labels, run_script, seeded_model, small_model, test_model};

use impactgrid::config::GridConfig;
use impactgrid::grid::{HeaderCell, HeaderKind, ScriptedSource, TableModel, ValidationError};
use impactgrid::messages::{AppMsg, EntryMsg, MenuMsg, Msg};
use impactgrid::model::{AppModel, EditTarget};
use impactgrid::update::update;
use impactgrid::Cmd;

const EMPTY_LABEL: &str = "新たな変化点を入力してください。";
const NO_DATA_ROWS: &str = "データ行がありません。";

// ========================================================================
// Placement Tests
// ========================================================================

#[test]
fn test_change_point_copies_source_row() {
    let mut model = test_model(3);
    let source = model.table.data_row(3).unwrap().clone();

    assert_eq!(
        update(&mut model, Msg::add_change_point("新機能X")),
        Some(Cmd::Redraw)
    );

    assert_eq!(model.table.data_row_count(), 11);
    let added = model.table.data_row(4).unwrap();
    assert_eq!(added.label, HeaderCell::editable("新機能X"));
    assert_eq!(added.cells, source.cells);
    assert_eq!(model.table.data_row(3).unwrap(), &source);
    assert_eq!(model.highlight.get(), Some(4));
}

#[test]
fn test_change_point_after_last_row() {
    let mut model = small_model(3, 2, 3);
    update(&mut model, Msg::add_change_point("末尾"));
    assert_eq!(row_labels(&model), vec!["r1", "r2", "r3", "末尾"]);
    assert_eq!(model.highlight.get(), Some(4));
}

#[test]
fn test_random_placement_stays_in_bounds() {
    for s in 0..64 {
        let mut model = seeded_model(s);
        update(&mut model, Msg::add_change_point("新機能X"));

        assert_eq!(model.table.row_count(), 12);
        let new_row = model.highlight.get().unwrap();
        assert!((2..=11).contains(&new_row), "seed {} placed at {}", s, new_row);
        assert_eq!(model.table.data_row(new_row).unwrap().label.text, "新機能X");
        assert_eq!(
            model.table.data_row(new_row).unwrap().cells,
            model.table.data_row(new_row - 1).unwrap().cells
        );
    }
}

#[test]
fn test_next_change_point_moves_highlight() {
    let mut model = AppModel::from_table(
        common::small_table(4, 1),
        GridConfig::default(),
        Box::new(ScriptedSource::new(vec![0, 3], Vec::new())),
    );
    update(&mut model, Msg::add_change_point("first"));
    assert_eq!(model.highlight.get(), Some(2));

    update(&mut model, Msg::add_change_point("second"));
    assert_eq!(model.highlight.get(), Some(5));
    assert_eq!(row_labels(&model), vec!["r1", "first", "r2", "r3", "second", "r4"]);
}

#[test]
fn test_change_point_closes_menu() {
    let mut model = small_model(3, 1, 1);
    apply(
        &mut model,
        [
            Msg::open_menu(HeaderKind::Row, 2, 0.0, 0.0),
            Msg::add_change_point("新機能X"),
        ],
    );
    assert!(!model.menu.is_open());
}

// ========================================================================
// Validation Tests
// ========================================================================

#[test]
fn test_blank_labels_are_rejected() {
    for label in ["", "   ", "\u{3000}", "\t\n"] {
        let mut model = test_model(1);
        let before = model.table.clone();

        let cmd = update(&mut model, Msg::add_change_point(label));
        assert_eq!(cmd, Some(Cmd::ShowNotice(EMPTY_LABEL.to_string())));
        assert_eq!(model.table, before);
        assert_eq!(model.highlight.get(), None);
        assert_eq!(model.ui.notice.as_deref(), Some(EMPTY_LABEL));
    }
}

#[test]
fn test_header_only_table_is_rejected() {
    let table = TableModel::new(HeaderCell::fixed("性能変化点"));
    let mut model = AppModel::from_table(
        table.clone(),
        GridConfig::default(),
        Box::new(ScriptedSource::default()),
    );

    let cmd = update(&mut model, Msg::add_change_point("新機能X"));
    assert_eq!(cmd, Some(Cmd::ShowNotice(NO_DATA_ROWS.to_string())));
    assert_eq!(model.table, table);
    assert_eq!(ValidationError::NoDataRows.to_string(), NO_DATA_ROWS);
}

#[test]
fn test_rejection_keeps_previous_highlight() {
    let mut model = test_model(2);
    update(&mut model, Msg::add_change_point("新機能X"));
    update(&mut model, Msg::add_change_point(" "));
    assert_eq!(model.highlight.get(), Some(3));
}

#[test]
fn test_success_clears_notice() {
    let mut model = test_model(1);
    let notices = run_script(&mut model, "submit\nadd 新機能X\n");
    assert_eq!(notices, vec![EMPTY_LABEL]);
    assert_eq!(model.ui.notice, None);
}

// ========================================================================
// Entry Draft Tests
// ========================================================================

#[test]
fn test_submit_adds_draft_and_clears_it() {
    let mut model = test_model(5);
    apply(
        &mut model,
        [
            Msg::Entry(EntryMsg::SetDraft("新機能Y".into())),
            Msg::Entry(EntryMsg::Submit),
        ],
    );
    assert_eq!(model.ui.draft, "");
    assert_eq!(model.table.data_row(6).unwrap().label.text, "新機能Y");
    assert_eq!(model.highlight.get(), Some(6));
}

#[test]
fn test_rejected_submit_keeps_draft() {
    let mut model = test_model(1);
    let cmds = apply(
        &mut model,
        [
            Msg::Entry(EntryMsg::SetDraft("   ".into())),
            Msg::Entry(EntryMsg::Submit),
        ],
    );
    assert_eq!(cmds[1].notice(), Some(EMPTY_LABEL));
    assert_eq!(model.ui.draft, "   ");
    assert_eq!(model.table.data_row_count(), 10);
}

// ========================================================================
// Reset Tests
// ========================================================================

#[test]
fn test_reset_restores_seed_shape_and_clears_trackers() {
    let mut model = test_model(1);
    apply(
        &mut model,
        [
            Msg::add_change_point("新機能X"),
            Msg::open_menu(HeaderKind::Column, 1, 0.0, 0.0),
            Msg::Menu(MenuMsg::ConfirmInsertColumn),
            Msg::open_menu(HeaderKind::Row, 1, 0.0, 0.0),
            Msg::Entry(EntryMsg::SetDraft("途中".into())),
        ],
    );

    assert_eq!(update(&mut model, Msg::App(AppMsg::Reset)), Some(Cmd::Redraw));
    assert_eq!(model.table.row_count(), 11);
    assert_eq!(model.table.column_count(), 6);
    assert_eq!(model.highlight.get(), None);
    assert_eq!(model.editing.target(), EditTarget::None);
    assert!(!model.menu.is_open());
    assert_eq!(model.ui.draft, "");
}
