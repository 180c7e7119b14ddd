//! Search sub-reducer: search box editing, debounced submission, tagged results.

use std::time::Instant;

use tracing::debug;

use crate::action::Action;
use crate::effect::Effect;
use crate::focused_pane::FocusedPane;
use crate::input_mode::InputMode;
use crate::load_state::LoadStatus;
use crate::search_state::SearchOutcome;
use crate::state::{AppState, DebounceKey};

pub fn reduce_search(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::EnterSearch => {
            state.ui.input_mode = InputMode::Search;
            state.ui.focused_pane = FocusedPane::Tables;
            Some(vec![])
        }
        Action::ExitSearch => {
            state.ui.input_mode = InputMode::Normal;
            Some(vec![])
        }

        Action::SearchInput(c) => {
            state.search.input.push(*c);
            Some(search_input_changed(state, now))
        }
        Action::SearchBackspace => {
            state.search.input.pop();
            Some(search_input_changed(state, now))
        }
        Action::SearchClear => {
            state.search.input.clear();
            Some(search_input_changed(state, now))
        }

        Action::SubmitSearch(query) => {
            if !state.search.is_current(query) {
                debug!(%query, "search input moved on before submit");
                return Some(vec![]);
            }
            Some(vec![Effect::SearchTables {
                query: query.clone(),
            }])
        }
        Action::SearchCompleted { query, results } => {
            if !state.search.is_current(query) {
                debug!(%query, "dropping stale search results");
                return Some(vec![]);
            }
            state.search.outcome = Some(SearchOutcome::Found(results.clone()));
            state.ui.table_cursor = 0;
            Some(vec![])
        }
        Action::SearchFailed { query, error } => {
            if !state.search.is_current(query) {
                debug!(%query, "dropping stale search failure");
                return Some(vec![]);
            }
            state.search.outcome = Some(SearchOutcome::Failed(error.clone()));
            state.ui.table_cursor = 0;
            Some(vec![])
        }

        _ => None,
    }
}

/// Blank input restores the namespace listing at once; anything else waits for
/// typing to settle.
fn search_input_changed(state: &mut AppState, now: Instant) -> Vec<Effect> {
    if state.search.is_blank() {
        state.debouncer.cancel(&DebounceKey::Search);
        state.search.outcome = None;
        state.catalog.tables_status = LoadStatus::Loading;
        state.ui.table_cursor = 0;
        return vec![Effect::FetchTables {
            namespace: state.catalog.selected_namespace().cloned(),
        }];
    }

    state.debouncer.schedule(
        DebounceKey::Search,
        state.settings.search_debounce,
        Action::SubmitSearch(state.search.input.clone()),
        now,
    );
    vec![]
}
