use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::panel_block;
use lakeview_app::view::SearchView;
use crate::theme::Theme;

pub struct SearchBar;

impl SearchBar {
    pub fn render(frame: &mut Frame, area: Rect, search: &SearchView) {
        let line = if search.value.is_empty() && !search.editing {
            Line::from(Span::styled(
                "Press / to search tables",
                Style::default().fg(Theme::TEXT_MUTED),
            ))
        } else {
            let mut spans = vec![Span::raw(search.value.clone())];
            if search.editing {
                spans.push(Span::styled("█", Style::default().fg(Theme::FOCUS_BORDER)));
            }
            Line::from(spans)
        };

        frame.render_widget(
            Paragraph::new(line).block(panel_block("Search", search.editing)),
            area,
        );
    }
}
