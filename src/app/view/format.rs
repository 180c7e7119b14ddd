//! Cell and number formatting shared by the panel projections.

use lakeview_domain::CellValue;

use super::tree::CellView;

/// Longest string shown untruncated.
pub const MAX_CELL_CHARS: usize = 100;

pub fn format_cell(value: &CellValue) -> CellView {
    match value {
        CellValue::Null => CellView::Null,
        CellValue::Text(text) if text.chars().count() > MAX_CELL_CHARS => {
            CellView::Truncated(text.chars().take(MAX_CELL_CHARS).collect())
        }
        other => CellView::Text(other.to_string()),
    }
}

/// `1234567` → `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Bare number followed by `%`: `12.5%`, `0%`.
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}
