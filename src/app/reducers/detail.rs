//! Detail sub-reducer: the per-table load chain, preview, query and statistics.

use std::time::Instant;

use tracing::{debug, warn};

use crate::action::Action;
use crate::detail_state::{SessionKey, SessionPhase};
use crate::detail_tab::DetailTab;
use crate::effect::Effect;
use crate::focused_pane::FocusedPane;
use crate::input_mode::InputMode;
use crate::load_state::Panel;
use crate::ports::CatalogError;
use crate::state::AppState;

pub fn reduce_detail(state: &mut AppState, action: &Action, _now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::SelectTable(table) => {
            state.catalog.select_table(table.clone());
            let session = state.detail.begin_session();
            state.detail.tab = DetailTab::Info;
            state.inline_error = None;
            state.ui.focused_pane = FocusedPane::Detail;
            state.ui.detail_scroll = 0;
            debug!(table = %table.qualified_name(), ?session, "opening detail session");
            Some(vec![Effect::FetchTableInfo {
                table: table.clone(),
                session,
            }])
        }

        Action::TableInfoLoaded { session, info } => {
            if !state.detail.is_current(*session) {
                debug!(?session, "dropping table info for superseded session");
                return Some(vec![]);
            }
            state.detail.info = Panel::Ready(*info.clone());
            state.detail.phase = SessionPhase::LoadingPreview;
            Some(preview_effects(state, *session))
        }
        Action::TableInfoFailed { session, error } => {
            if !state.detail.is_current(*session) {
                debug!(?session, "dropping table info failure for superseded session");
                return Some(vec![]);
            }
            warn!(%error, "failed to load table info");
            state.detail.info = Panel::Failed(error.clone());
            state.detail.preview = Panel::Empty;
            state.detail.phase = SessionPhase::Failed;
            Some(vec![])
        }

        Action::PreviewLoaded {
            session,
            request,
            preview,
        } => {
            if !state.detail.is_current_preview(*session, *request) {
                debug!(?session, request, "dropping superseded preview");
                return Some(vec![]);
            }
            state.detail.preview = Panel::Ready(*preview.clone());
            state.detail.phase = SessionPhase::Ready;
            Some(vec![])
        }
        Action::PreviewFailed {
            session,
            request,
            error,
        } => {
            if !state.detail.is_current_preview(*session, *request) {
                debug!(?session, request, "dropping superseded preview failure");
                return Some(vec![]);
            }
            warn!(%error, "failed to load table preview");
            state.detail.preview = Panel::Failed(error.clone());
            state.detail.phase = SessionPhase::Failed;
            Some(vec![])
        }

        Action::RefreshPreview => Some(refetch_preview(state)),
        Action::CyclePreviewLimit => {
            state.detail.preview_limit = state
                .settings
                .next_preview_limit(state.detail.preview_limit);
            Some(refetch_preview(state))
        }

        Action::ExecuteQuery => {
            if state.detail.query.running {
                return Some(vec![]);
            }
            if state.detail.query.text.trim().is_empty() {
                let error = CatalogError::Validation("Please enter a SQL query".into());
                state.inline_error = Some(query_error_text(&error));
                return Some(vec![]);
            }
            let (Some(table), Some(session)) = (
                state.catalog.selected_table().cloned(),
                state.detail.session(),
            ) else {
                let error = CatalogError::Validation("Please select a table first".into());
                state.inline_error = Some(query_error_text(&error));
                return Some(vec![]);
            };
            state.detail.query.running = true;
            Some(vec![Effect::ExecuteQuery {
                table,
                session,
                query: state.detail.query.text.clone(),
                limit: state.settings.query_limit,
            }])
        }
        Action::QueryCompleted { session, outcome } => {
            if !state.detail.is_current(*session) {
                debug!(?session, "dropping query result for superseded session");
                return Some(vec![]);
            }
            state.detail.query.running = false;
            state.detail.query.result = Some(*outcome.clone());
            Some(vec![])
        }
        Action::QueryFailed { session, error } => {
            if !state.detail.is_current(*session) {
                debug!(?session, "dropping query failure for superseded session");
                return Some(vec![]);
            }
            warn!(%error, "query failed");
            state.detail.query.running = false;
            state.inline_error = Some(query_error_text(error));
            Some(vec![])
        }

        Action::LoadStatistics => {
            if state.detail.statistics.loading {
                return Some(vec![]);
            }
            let (Some(table), Some(session)) = (
                state.catalog.selected_table().cloned(),
                state.detail.session(),
            ) else {
                let error = CatalogError::Validation("Please select a table first".into());
                state.inline_error = Some(statistics_error_text(&error));
                return Some(vec![]);
            };
            state.detail.statistics.loading = true;
            state.detail.tab = DetailTab::Statistics;
            Some(vec![Effect::FetchStatistics { table, session }])
        }
        Action::StatisticsLoaded {
            session,
            statistics,
        } => {
            if !state.detail.is_current(*session) {
                debug!(?session, "dropping statistics for superseded session");
                return Some(vec![]);
            }
            state.detail.statistics.loading = false;
            state.detail.statistics.data = Some(*statistics.clone());
            Some(vec![])
        }
        Action::StatisticsFailed { session, error } => {
            if !state.detail.is_current(*session) {
                debug!(?session, "dropping statistics failure for superseded session");
                return Some(vec![]);
            }
            warn!(%error, "failed to load statistics");
            state.detail.statistics.loading = false;
            state.inline_error = Some(statistics_error_text(error));
            Some(vec![])
        }

        Action::DismissError => {
            state.inline_error = None;
            Some(vec![])
        }

        Action::NextTab => {
            state.detail.tab = state.detail.tab.next();
            state.ui.detail_scroll = 0;
            Some(vec![])
        }
        Action::PreviousTab => {
            state.detail.tab = state.detail.tab.prev();
            state.ui.detail_scroll = 0;
            Some(vec![])
        }
        Action::SelectTab(tab) => {
            state.detail.tab = *tab;
            state.ui.detail_scroll = 0;
            Some(vec![])
        }

        Action::EnterQueryEditor => {
            state.ui.input_mode = InputMode::QueryEditor;
            state.ui.focused_pane = FocusedPane::Detail;
            state.detail.tab = DetailTab::Query;
            Some(vec![])
        }
        Action::ExitQueryEditor => {
            state.ui.input_mode = InputMode::Normal;
            Some(vec![])
        }
        Action::QueryInput(c) => {
            state.detail.query.text.push(*c);
            Some(vec![])
        }
        Action::QueryBackspace => {
            state.detail.query.text.pop();
            Some(vec![])
        }
        Action::QueryClear => {
            state.detail.query.text.clear();
            Some(vec![])
        }

        _ => None,
    }
}

/// Preview follows info, so a refetch before info is Ready (still loading or
/// failed) is skipped; a later info success picks up the current limit.
fn refetch_preview(state: &mut AppState) -> Vec<Effect> {
    match state.detail.session() {
        Some(session) if state.detail.info.ready().is_some() => preview_effects(state, session),
        session => {
            debug!(?session, phase = ?state.detail.phase, "preview refetch waits for table info");
            vec![]
        }
    }
}

/// Re-issues the preview for the selected table under a fresh request tag.
fn preview_effects(state: &mut AppState, session: SessionKey) -> Vec<Effect> {
    let Some(table) = state.catalog.selected_table().cloned() else {
        return vec![];
    };
    let request = state.detail.next_preview_request();
    state.detail.preview = Panel::Loading;
    state.detail.phase = SessionPhase::LoadingPreview;
    vec![Effect::FetchPreview {
        table,
        session,
        request,
        limit: state.detail.preview_limit,
    }]
}

pub fn query_error_text(error: &CatalogError) -> String {
    match error {
        CatalogError::Application(msg) => format!("Query Error: {msg}"),
        CatalogError::Network(msg) => format!("Error executing query: {msg}"),
        CatalogError::Validation(msg) => msg.clone(),
    }
}

pub fn statistics_error_text(error: &CatalogError) -> String {
    match error {
        CatalogError::Network(msg) => format!("Error loading statistics: {msg}"),
        CatalogError::Application(msg) | CatalogError::Validation(msg) => msg.clone(),
    }
}
