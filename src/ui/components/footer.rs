use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::key_text;
use lakeview_app::view::KeyHint;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, hints: &[KeyHint]) {
        frame.render_widget(Paragraph::new(Self::build_hint_line(hints)), area);
    }

    fn build_hint_line(hints: &[KeyHint]) -> Line<'static> {
        let mut spans = Vec::new();

        for (i, hint) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(key_text(hint.key));
            spans.push(Span::raw(format!(":{}", hint.description)));
        }

        Line::from(spans)
    }
}
