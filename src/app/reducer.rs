//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! Debounce timers are armed on `state.debouncer` with the given `now`; the event
//! loop collects them once due.

use std::time::Instant;

use crate::action::Action;
use crate::connection_state::ConnectionIndicator;
use crate::effect::Effect;
use crate::load_state::LoadStatus;
use crate::reducers::{reduce_catalog, reduce_detail, reduce_navigation, reduce_search};
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    // Mark dirty for all state-changing actions (except None and Render)
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_catalog(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_search(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_detail(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_navigation(state, &action, now) {
        return effects;
    }

    match action {
        Action::None | Action::Resize(..) => vec![],
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Render => {
            state.clear_expired_timers(now);
            state.clear_dirty();
            vec![Effect::Render]
        }
        Action::Init => {
            state.connection = ConnectionIndicator::Checking;
            state.catalog.namespaces_status = LoadStatus::Loading;
            state.catalog.tables_status = LoadStatus::Loading;
            vec![
                Effect::CheckStatus,
                Effect::FetchOverview,
                Effect::FetchNamespaces,
                Effect::FetchTables { namespace: None },
            ]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use lakeview_domain::{Namespace, TableRef};

    fn create_test_state() -> AppState {
        AppState::new(Settings::default())
    }

    #[test]
    fn init_issues_startup_loads_together() {
        let mut state = create_test_state();

        let effects = reduce(&mut state, Action::Init, Instant::now());

        assert_eq!(
            effects,
            vec![
                Effect::CheckStatus,
                Effect::FetchOverview,
                Effect::FetchNamespaces,
                Effect::FetchTables { namespace: None },
            ]
        );
        assert!(state.catalog.namespaces_status.is_loading());
    }

    #[test]
    fn render_clears_dirty_flag() {
        let mut state = create_test_state();
        state.mark_dirty();

        let effects = reduce(&mut state, Action::Render, Instant::now());

        assert_eq!(effects, vec![Effect::Render]);
        assert!(!state.render_dirty);
    }

    #[test]
    fn state_changing_action_marks_dirty() {
        let mut state = create_test_state();
        state.clear_dirty();

        reduce(&mut state, Action::FocusNext, Instant::now());

        assert!(state.render_dirty);
    }

    #[test]
    fn quit_sets_flag() {
        let mut state = create_test_state();

        reduce(&mut state, Action::Quit, Instant::now());

        assert!(state.should_quit);
    }

    #[test]
    fn namespace_switch_drops_listing_for_previous_namespace() {
        let mut state = create_test_state();
        let now = Instant::now();
        reduce(
            &mut state,
            Action::SelectNamespace(Some(Namespace::new("sales"))),
            now,
        );
        reduce(
            &mut state,
            Action::SelectNamespace(Some(Namespace::new("finance"))),
            now,
        );

        reduce(
            &mut state,
            Action::TablesLoaded {
                namespace: Some(Namespace::new("sales")),
                tables: vec![TableRef::new("sales", "orders")],
            },
            now,
        );
        reduce(
            &mut state,
            Action::TablesLoaded {
                namespace: Some(Namespace::new("finance")),
                tables: vec![TableRef::new("finance", "ledger")],
            },
            now,
        );

        assert_eq!(state.catalog.tables, vec![TableRef::new("finance", "ledger")]);
    }
}
