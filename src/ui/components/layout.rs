use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::catalog_panel::CatalogPanel;
use super::detail::DetailPane;
use super::footer::Footer;
use super::header::Header;
use super::search_bar::SearchBar;
use super::toast::ToastStack;
use lakeview_app::view::Screen;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, screen: &Screen, time_ms: u128) {
        let area = frame.area();

        let [header_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::render(frame, header_area, &screen.header, time_ms);

        let [left_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
                .areas(main_area);

        let [namespaces_area, search_area, tables_area] = Layout::vertical([
            Constraint::Percentage(35),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(left_area);

        CatalogPanel::render(frame, namespaces_area, &screen.namespaces, time_ms);
        SearchBar::render(frame, search_area, &screen.search);
        CatalogPanel::render(frame, tables_area, &screen.tables, time_ms);

        DetailPane::render(
            frame,
            detail_area,
            &screen.detail,
            screen.inline_error.as_deref(),
            time_ms,
        );

        Footer::render(frame, footer_area, &screen.footer);

        // Toasts float above everything else
        ToastStack::render(frame, area, &screen.toasts);
    }
}
