//! Plain-text rendering of engine output.

use std::fmt::Write;

use genka_core::cost::{DashboardSummary, RecipeCostRow};
use genka_core::label::LabelLayout;
use genka_core::money::{format_percentage, format_yen};

/// One tab-separated line per recipe, under a header line.
pub fn cost_table(rows: &[RecipeCostRow]) -> String {
    let mut out = String::from("商品名\t材料費\t原価\t原価率\t利益\t利益率\n");
    for row in rows {
        let cost = &row.cost;
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            row.product_name,
            format_yen(cost.material_cost),
            format_yen(cost.cost_per_item),
            format_percentage(cost.cost_rate_pct),
            format_yen(cost.profit),
            format_percentage(cost.profit_rate_pct),
        );
    }
    out
}

pub fn dashboard_line(summary: &DashboardSummary) -> String {
    format!(
        "レシピ数: {}  材料数: {}  平均原価率: {}",
        summary.total_recipes,
        summary.ingredients_count,
        format_percentage(summary.average_cost_rate_pct)
    )
}

/// Frame, font and one line per fragment with its position.
pub fn layout_listing(layout: &LabelLayout) -> String {
    let frame = &layout.frame;
    let mut out = format!(
        "frame x={:.1} y={:.1} w={:.1} h={:.1} mm\nfont {}\n",
        frame.x, frame.y, frame.width, frame.height, layout.font.name
    );
    for fragment in &layout.fragments {
        let _ = writeln!(
            out,
            "{:>6.1} {:>6.1} {:>4.1}pt  {}",
            fragment.x, fragment.y, fragment.font_size, fragment.text
        );
    }
    out
}
