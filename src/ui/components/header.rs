use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::spinner_char;
use lakeview_app::view::HeaderView;
use crate::theme::Theme;

pub struct Header;

impl Header {
    /// Title, status and summary on the first row; backend endpoints on the second.
    pub fn render(frame: &mut Frame, area: Rect, header: &HeaderView, time_ms: u128) {
        let mut spans = vec![
            Span::styled(
                header.title.clone(),
                Style::default()
                    .fg(Theme::TEXT_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                header.status.label.clone(),
                Style::default().fg(Theme::tone(header.status.tone)),
            ),
        ];
        if let Some(summary) = &header.summary {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(summary.clone()));
        }
        if header.refreshing {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("{} Refreshing...", spinner_char(time_ms)),
                Style::default().fg(Theme::TEXT_MUTED),
            ));
        }

        let mut lines = vec![Line::from(spans)];

        let mut endpoint_spans = Vec::new();
        for (idx, field) in header.endpoints.iter().enumerate() {
            if idx > 0 {
                endpoint_spans.push(Span::raw("  "));
            }
            endpoint_spans.push(Span::styled(
                format!("{}: ", field.label),
                Style::default().fg(Theme::TEXT_MUTED),
            ));
            endpoint_spans.push(Span::raw(field.value.display_text()));
        }
        lines.push(Line::from(endpoint_spans));

        frame.render_widget(Paragraph::new(lines), area);
    }
}
