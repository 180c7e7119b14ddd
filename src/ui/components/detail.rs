use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::panel_block;
use super::view_nodes::node_lines;
use lakeview_app::view::{DetailView, TabView, Tone};
use crate::theme::Theme;

pub struct DetailPane;

impl DetailPane {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        detail: &DetailView,
        inline_error: Option<&str>,
        time_ms: u128,
    ) {
        let block = panel_block(&detail.title, detail.focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let error_height = u16::from(inline_error.is_some());
        let [tabs_area, error_area, body_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(error_height),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(tab_line(&detail.tabs)), tabs_area);

        if let Some(message) = inline_error {
            let line = Line::from(vec![
                Span::styled(
                    message.to_string(),
                    Style::default().fg(Theme::tone(Tone::Danger)),
                ),
                Span::styled("  (x to dismiss)", Style::default().fg(Theme::TEXT_MUTED)),
            ]);
            frame.render_widget(Paragraph::new(line), error_area);
        }

        let (lines, _) = node_lines(&detail.body, None, time_ms);
        let scroll = clamp_scroll(detail.scroll, lines.len(), body_area.height);
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body_area);
    }
}

fn tab_line(tabs: &[TabView]) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, tab) in tabs.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Theme::TEXT_MUTED)));
        }
        let label = format!("{} {}", idx + 1, tab.label);
        let style = if tab.active {
            Style::default()
                .fg(Theme::TEXT_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Theme::TEXT_MUTED)
        };
        spans.push(Span::styled(label, style));
    }
    Line::from(spans)
}

/// Scrolling stops once the last line reaches the bottom of the viewport.
fn clamp_scroll(requested: u16, total_lines: usize, visible: u16) -> u16 {
    let max = (total_lines as u16).saturating_sub(visible);
    requested.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_clamped_to_content() {
        assert_eq!(clamp_scroll(u16::MAX, 30, 10), 20);
        assert_eq!(clamp_scroll(5, 30, 10), 5);
        assert_eq!(clamp_scroll(3, 4, 10), 0);
    }

    #[test]
    fn tabs_are_numbered() {
        let tabs = vec![
            TabView {
                label: "Info".to_string(),
                active: true,
            },
            TabView {
                label: "Schema".to_string(),
                active: false,
            },
        ];

        let text: String = tab_line(&tabs)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();

        assert_eq!(text, "1 Info │ 2 Schema");
    }
}
