use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MIN_COL_WIDTH: usize = 4;
pub const MAX_COL_WIDTH: usize = 40;

/// Display width of each column: the widest of header and cells, clamped to
/// `MIN_COL_WIDTH..=MAX_COL_WIDTH`.
pub fn column_widths<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let widest_cell = rows
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0);
            header
                .as_ref()
                .width()
                .max(widest_cell)
                .clamp(MIN_COL_WIDTH, MAX_COL_WIDTH)
        })
        .collect()
}

/// Pads or cuts `text` to exactly `width` display columns. Cut text ends with `…`.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
