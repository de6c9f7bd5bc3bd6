//! Initial table contents
//!
//! A fixed list of impact viewpoints (columns) and performance change
//! points (rows). Each data cell independently records whether the change
//! point affects the viewpoint; there is no consistency rule across a row.

use super::model::{DataRow, HeaderCell, Placeholders, TableModel};
use super::random::RandomSource;

/// Corner header naming the row-label column
pub const CORNER_LABEL: &str = "性能変化点";

/// Vehicle impact viewpoints, one column each
pub const IMPACT_VIEWPOINTS: &[&str] = &[
    "燃費への影響",
    "排出ガスへの影響",
    "加速性能への影響",
    "ブレーキ性能への影響",
    "操縦安定性への影響",
];

/// Performance change points, one row each
pub const CHANGE_POINTS: &[&str] = &[
    "エンジン制御アルゴリズムの更新",
    "トランスミッションギア比の変更",
    "タイヤサイズの変更",
    "ブレーキパッド材質の変更",
    "サスペンション設定の調整",
    "空力パーツの追加",
    "電動パワーステアリングの調整",
    "排気システムの最適化",
    "ハイブリッドシステムの制御改善",
    "エアコン制御ロジックの変更",
];

/// Cell text for an assessment
pub fn impact_text(viewpoint: &str, has_impact: bool) -> String {
    if has_impact {
        format!("影響あり\n理由：{}に改善効果", viewpoint)
    } else {
        "影響なし\n理由：変更なし".to_string()
    }
}

/// Build the seed table from explicit lists
///
/// Seeded headers and labels are not editable.
pub fn generate_from(
    viewpoints: &[&str],
    change_points: &[&str],
    source: &mut dyn RandomSource,
) -> TableModel {
    let mut header = Vec::with_capacity(viewpoints.len() + 1);
    header.push(HeaderCell::fixed(CORNER_LABEL));
    header.extend(viewpoints.iter().map(|vp| HeaderCell::fixed(*vp)));

    let rows = change_points
        .iter()
        .map(|point| {
            let cells = viewpoints
                .iter()
                .map(|vp| impact_text(vp, source.coin()))
                .collect();
            DataRow::new(HeaderCell::fixed(*point), cells)
        })
        .collect::<Vec<_>>();

    tracing::info!(
        rows = rows.len() + 1,
        columns = header.len(),
        "seeded table"
    );

    match TableModel::from_parts(header, rows) {
        Ok(table) => table,
        // Every row is built from the same viewpoint list, so widths agree
        Err(err) => unreachable!("seed rows have uniform width: {err}"),
    }
}

/// Build the standard seed table (11 rows x 6 columns)
pub fn generate(source: &mut dyn RandomSource, placeholders: Placeholders) -> TableModel {
    generate_from(IMPACT_VIEWPOINTS, CHANGE_POINTS, source)
        .with_placeholders(placeholders)
}
