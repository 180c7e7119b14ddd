use std::time::Instant;

use super::action::Action;
use super::catalog_state::CatalogState;
use super::connection_state::ConnectionIndicator;
use super::debounce::Debouncer;
use super::detail_state::DetailState;
use super::search_state::SearchState;
use super::settings::Settings;
use super::toast_state::ToastState;
use super::ui_state::UiState;
use lakeview_domain::{BackendEndpoints, TableRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceKey {
    Search,
}

pub struct AppState {
    pub settings: Settings,
    pub should_quit: bool,
    pub connection: ConnectionIndicator,
    pub endpoints: Option<BackendEndpoints>,
    pub catalog: CatalogState,
    pub search: SearchState,
    pub detail: DetailState,
    pub toasts: ToastState,
    pub ui: UiState,
    /// Dismissible alert for query/statistics failures and validation errors
    pub inline_error: Option<String>,
    pub refreshing: bool,
    pub debouncer: Debouncer<DebounceKey, Action>,
    pub render_dirty: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let detail = DetailState::new(settings.preview_limit);
        Self {
            settings,
            should_quit: false,
            connection: ConnectionIndicator::default(),
            endpoints: None,
            catalog: CatalogState::default(),
            search: SearchState::default(),
            detail,
            toasts: ToastState::default(),
            ui: UiState::default(),
            inline_error: None,
            refreshing: false,
            debouncer: Debouncer::new(),
            render_dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn clear_expired_timers(&mut self, now: Instant) {
        if self.toasts.clear_expired_at(now) {
            self.render_dirty = true;
        }
    }

    /// Search results while a search is shown, otherwise the namespace listing.
    pub fn visible_tables(&self) -> &[TableRef] {
        match self.search.results() {
            Some(results) => &results.tables,
            None if self.search.outcome.is_some() => &[],
            None => &self.catalog.tables,
        }
    }

    pub fn table_under_cursor(&self) -> Option<&TableRef> {
        self.visible_tables().get(self.ui.table_cursor)
    }
}
