use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use lakeview_app::view::ToastView;
use crate::theme::Theme;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 4;

pub struct ToastStack;

impl ToastStack {
    /// Stacks toasts downward from the top-right corner of `area`, oldest first.
    pub fn render(frame: &mut Frame, area: Rect, toasts: &[ToastView]) {
        let width = TOAST_WIDTH.min(area.width);
        let x = area.x + area.width.saturating_sub(width);

        for (idx, toast) in toasts.iter().enumerate() {
            let y = area.y + 1 + idx as u16 * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);
            let color = Theme::tone(toast.tone);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(Span::styled(
                    format!(" {} ", toast.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(Theme::TOAST_BG));

            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(Line::from(toast.message.clone()))
                    .wrap(Wrap { trim: true })
                    .block(block),
                rect,
            );
        }
    }
}
