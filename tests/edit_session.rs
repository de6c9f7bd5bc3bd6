//! Edit session tests
//!
//! Tests for entering/leaving edit mode and routing text input through the
//! update function.

mod common;

use common::{apply, small_model, test_model};

use impactgrid::grid::HeaderKind;
use impactgrid::messages::{EditMsg, GridMsg, Msg};
use impactgrid::model::EditTarget;
use impactgrid::update::update;
use impactgrid::Cmd;

fn input(text: &str) -> Msg {
    Msg::Edit(EditMsg::Input(text.to_string()))
}

// ========================================================================
// Transition Tests
// ========================================================================

#[test]
fn test_begin_cell_edit() {
    let mut model = small_model(3, 3, 1);
    assert_eq!(update(&mut model, Msg::begin_cell(2, 3)), Some(Cmd::Redraw));
    assert_eq!(model.editing.target(), EditTarget::Cell { row: 2, col: 3 });
}

#[test]
fn test_second_edit_replaces_first() {
    let mut model = small_model(3, 3, 1);
    apply(&mut model, [Msg::begin_cell(1, 1), Msg::begin_cell(3, 2)]);
    assert_eq!(model.editing.target(), EditTarget::Cell { row: 3, col: 2 });
    assert!(!model.editing.is_editing_cell(1, 1));
}

#[test]
fn test_blur_ends_edit() {
    let mut model = small_model(2, 2, 1);
    update(&mut model, Msg::begin_cell(1, 1));
    assert_eq!(update(&mut model, Msg::end_edit()), Some(Cmd::Redraw));
    assert_eq!(model.editing.target(), EditTarget::None);

    // Blur with nothing in edit mode is a no-op
    assert_eq!(update(&mut model, Msg::end_edit()), None);
}

#[test]
fn test_fixed_header_does_not_enter_edit_mode() {
    let mut model = test_model(1);
    update(&mut model, Msg::begin_cell(1, 1));

    assert_eq!(update(&mut model, Msg::begin_header(HeaderKind::Row, 3)), None);
    assert_eq!(update(&mut model, Msg::begin_header(HeaderKind::Column, 0)), None);
    assert_eq!(model.editing.target(), EditTarget::Cell { row: 1, col: 1 });
}

#[test]
fn test_invalid_cell_address_is_rejected_without_notice() {
    let mut model = small_model(2, 2, 1);
    assert_eq!(update(&mut model, Msg::begin_cell(0, 1)), None);
    assert_eq!(update(&mut model, Msg::begin_cell(1, 0)), None);
    assert_eq!(update(&mut model, Msg::begin_cell(9, 9)), None);
    assert_eq!(model.editing.target(), EditTarget::None);
    assert_eq!(model.ui.notice, None);
}

// ========================================================================
// Input Routing Tests
// ========================================================================

#[test]
fn test_input_goes_to_active_cell() {
    let mut model = small_model(2, 2, 1);
    apply(
        &mut model,
        [
            Msg::begin_cell(2, 1),
            input("影響あり\n理由：再評価"),
            Msg::end_edit(),
        ],
    );
    assert_eq!(model.table.cell(2, 1).unwrap(), "影響あり\n理由：再評価");
    assert_eq!(model.table.cell(1, 1).unwrap(), "r1c1");
}

#[test]
fn test_input_without_edit_target_is_ignored() {
    let mut model = small_model(2, 2, 1);
    let before = model.table.clone();
    assert_eq!(update(&mut model, input("lost")), None);
    assert_eq!(model.table, before);
}

#[test]
fn test_addressed_write_requires_matching_target() {
    let mut model = small_model(2, 2, 1);
    update(&mut model, Msg::begin_cell(1, 1));

    let stray = Msg::Grid(GridMsg::SetCell {
        row: 2,
        col: 2,
        text: "stray".into(),
    });
    assert_eq!(update(&mut model, stray), None);
    assert_eq!(model.table.cell(2, 2).unwrap(), "r2c2");

    let aimed = Msg::Grid(GridMsg::SetCell {
        row: 1,
        col: 1,
        text: "aimed".into(),
    });
    assert_eq!(update(&mut model, aimed), Some(Cmd::Redraw));
    assert_eq!(model.table.cell(1, 1).unwrap(), "aimed");
}

#[test]
fn test_header_write_requires_header_edit() {
    let mut model = small_model(2, 2, 1);
    let rename = Msg::Grid(GridMsg::SetHeaderText {
        kind: HeaderKind::Row,
        index: 1,
        text: "renamed".into(),
    });
    assert_eq!(update(&mut model, rename), None);
    assert_eq!(model.table.data_row(1).unwrap().label.text, "r1");
}

// ========================================================================
// Reconciliation Tests
// ========================================================================

#[test]
fn test_cell_target_follows_row_insert() {
    // Change points copy row 2 and land at row 3
    let mut model = small_model(5, 2, 2);
    apply(
        &mut model,
        [Msg::begin_cell(4, 1), Msg::add_change_point("新機能X")],
    );

    assert_eq!(model.editing.target(), EditTarget::Cell { row: 5, col: 1 });
    update(&mut model, input("still r4"));
    assert_eq!(model.table.cell(5, 1).unwrap(), "still r4");
    assert_eq!(model.table.data_row(5).unwrap().label.text, "r4");
}

#[test]
fn test_cell_target_above_insert_is_unchanged() {
    let mut model = small_model(5, 2, 3);
    apply(
        &mut model,
        [Msg::begin_cell(2, 2), Msg::add_change_point("新機能X")],
    );
    assert_eq!(model.editing.target(), EditTarget::Cell { row: 2, col: 2 });
}

#[test]
fn test_inserted_change_point_label_is_editable() {
    let mut model = test_model(2);
    update(&mut model, Msg::add_change_point("新機能X"));

    assert_eq!(
        update(&mut model, Msg::begin_header(HeaderKind::Row, 3)),
        Some(Cmd::Redraw)
    );
    apply(&mut model, [input("新機能X（改）"), Msg::end_edit()]);
    assert_eq!(model.table.data_row(3).unwrap().label.text, "新機能X（改）");
    assert!(model.table.data_row(3).unwrap().label.editable);
}

#[test]
fn test_row_label_target_follows_change_point_above_it() {
    // Both change points copy row 1 and land at row 2
    let mut model = small_model(4, 1, 1);
    update(&mut model, Msg::add_change_point("A"));
    assert_eq!(
        update(&mut model, Msg::begin_header(HeaderKind::Row, 2)),
        Some(Cmd::Redraw)
    );

    update(&mut model, Msg::add_change_point("B"));
    assert_eq!(
        model.editing.target(),
        EditTarget::Header {
            kind: HeaderKind::Row,
            index: 3
        }
    );

    update(&mut model, input("A2"));
    assert_eq!(
        common::row_labels(&model),
        vec!["r1", "B", "A2", "r2", "r3", "r4"]
    );
}
