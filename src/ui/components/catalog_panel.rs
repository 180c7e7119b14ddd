use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use super::atoms::panel_block;
use super::view_nodes::node_lines;
use lakeview_app::view::PanelView;

pub struct CatalogPanel;

impl CatalogPanel {
    /// Renders a list panel, scrolled so the cursor stays in view.
    pub fn render(frame: &mut Frame, area: Rect, panel: &PanelView, time_ms: u128) {
        let block = panel_block(&panel.title, panel.focused);
        let inner_height = block.inner(area).height as usize;

        let (lines, cursor_line) = node_lines(&panel.nodes, panel.cursor, time_ms);
        let offset = scroll_offset(cursor_line, inner_height);

        frame.render_widget(
            Paragraph::new(lines).block(block).scroll((offset, 0)),
            area,
        );
    }
}

fn scroll_offset(cursor_line: Option<usize>, visible: usize) -> u16 {
    match cursor_line {
        Some(line) if visible > 0 && line >= visible => (line + 1 - visible) as u16,
        _ => 0,
    }
}
