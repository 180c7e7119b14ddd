use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::theme::Theme;

/// Creates a panel block with focus-aware border styling.
pub fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let (border_style, title_style) = if focused {
        (
            Style::default().fg(Theme::FOCUS_BORDER),
            Style::default()
                .fg(Theme::FOCUS_BORDER)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Theme::UNFOCUS_BORDER),
            Style::default(),
        )
    };

    Block::default()
        .title(format!(" {title} "))
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_style(border_style)
}
