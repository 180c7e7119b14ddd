//! Catalog sub-reducer: connection status, overview, namespace and table listings.

use std::time::Instant;

use tracing::{debug, warn};

use crate::action::Action;
use crate::connection_state::ConnectionIndicator;
use crate::effect::Effect;
use crate::focused_pane::FocusedPane;
use crate::load_state::LoadStatus;
use crate::state::{AppState, DebounceKey};
use crate::toast_state::ToastKind;

/// Handles status, overview, listing and refresh actions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_catalog(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::StatusChecked(status) => {
            state.endpoints.clone_from(&status.endpoints);
            if status.connected {
                state.connection = ConnectionIndicator::Connected;
            } else {
                let reason = status.message.clone();
                warn!(reason = reason.as_deref().unwrap_or(""), "backend disconnected");
                state.toasts.push_at(
                    "Connection Error",
                    reason.clone().unwrap_or_default(),
                    ToastKind::Error,
                    now,
                );
                state.connection = ConnectionIndicator::Disconnected(reason);
            }
            Some(vec![])
        }
        Action::StatusCheckFailed(error) => {
            warn!(%error, "connection check failed");
            state.connection = ConnectionIndicator::CheckFailed;
            Some(vec![])
        }

        Action::OverviewLoaded(overview) => {
            state.catalog.overview = Some(overview.clone());
            Some(vec![])
        }
        Action::OverviewFailed(error) => {
            warn!(%error, "failed to load overview");
            Some(vec![])
        }

        Action::NamespacesLoaded(namespaces) => {
            state.catalog.replace_namespaces(namespaces.clone());
            state.ui.namespace_cursor = state.ui.namespace_cursor.min(namespaces.len());
            Some(vec![])
        }
        Action::NamespacesFailed(error) => {
            warn!(%error, "failed to load namespaces");
            state.catalog.namespaces_status = LoadStatus::Failed(error.clone());
            Some(vec![])
        }

        Action::SelectNamespace(namespace) => {
            state.catalog.select_namespace(namespace.clone());
            state.ui.namespace_cursor = match namespace {
                None => 0,
                Some(ns) => state
                    .catalog
                    .namespaces
                    .iter()
                    .position(|n| n == ns)
                    .map_or(0, |idx| idx + 1),
            };
            state.search.input.clear();
            state.search.outcome = None;
            state.debouncer.cancel(&DebounceKey::Search);
            state.catalog.tables_status = LoadStatus::Loading;
            state.ui.table_cursor = 0;
            state.ui.focused_pane = FocusedPane::Tables;
            Some(vec![Effect::FetchTables {
                namespace: namespace.clone(),
            }])
        }
        Action::TablesLoaded { namespace, tables } => {
            if !state.catalog.is_current_namespace(namespace.as_ref()) {
                debug!(?namespace, "dropping table listing for superseded namespace");
                return Some(vec![]);
            }
            state.catalog.replace_tables(tables.clone());
            let visible = state.visible_tables().len();
            state.ui.clamp_table_cursor(visible);
            Some(vec![])
        }
        Action::TablesFailed { namespace, error } => {
            if !state.catalog.is_current_namespace(namespace.as_ref()) {
                debug!(?namespace, "dropping table listing failure for superseded namespace");
                return Some(vec![]);
            }
            warn!(%error, ?namespace, "failed to load tables");
            state.catalog.tables_status = LoadStatus::Failed(error.clone());
            Some(vec![])
        }

        Action::RefreshAll => {
            if state.refreshing {
                debug!("refresh already in progress");
                return Some(vec![]);
            }
            state.refreshing = true;
            Some(vec![Effect::RefreshAll {
                namespace: state.catalog.selected_namespace().cloned(),
            }])
        }
        Action::RefreshSettled => {
            state.refreshing = false;
            state
                .toasts
                .push_at("Success", "Data refreshed successfully", ToastKind::Success, now);
            Some(vec![])
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CatalogError;
    use crate::settings::Settings;
    use lakeview_domain::{BackendEndpoints, ConnectionStatus, Namespace, TableRef};

    fn create_test_state() -> AppState {
        AppState::new(Settings::default())
    }

    mod connection_status {
        use super::*;

        #[test]
        fn connected_status_sets_indicator_and_endpoints() {
            let mut state = create_test_state();
            let status = ConnectionStatus {
                connected: true,
                message: None,
                endpoints: Some(BackendEndpoints {
                    catalog_uri: Some("http://nessie:19120/api/v1".into()),
                    ..Default::default()
                }),
            };

            reduce_catalog(&mut state, &Action::StatusChecked(status), Instant::now());

            assert!(state.connection.is_connected());
            assert!(state.endpoints.is_some());
            assert!(state.toasts.visible().is_empty());
        }

        #[test]
        fn disconnected_status_raises_connection_error_toast() {
            let mut state = create_test_state();
            let status = ConnectionStatus {
                connected: false,
                message: Some("catalog unreachable".into()),
                endpoints: None,
            };

            reduce_catalog(&mut state, &Action::StatusChecked(status), Instant::now());

            assert_eq!(
                state.connection,
                ConnectionIndicator::Disconnected(Some("catalog unreachable".into()))
            );
            let toast = &state.toasts.visible()[0];
            assert_eq!(toast.title, "Connection Error");
            assert_eq!(toast.message, "catalog unreachable");
            assert_eq!(toast.kind, ToastKind::Error);
        }

        #[test]
        fn failed_check_is_distinct_from_disconnected() {
            let mut state = create_test_state();

            reduce_catalog(
                &mut state,
                &Action::StatusCheckFailed(CatalogError::Network("refused".into())),
                Instant::now(),
            );

            assert_eq!(state.connection, ConnectionIndicator::CheckFailed);
            assert!(state.toasts.visible().is_empty());
        }
    }

    mod listings {
        use super::*;

        #[test]
        fn select_namespace_scopes_table_reload() {
            let mut state = create_test_state();
            state.search.input = "ord".into();

            let effects = reduce_catalog(
                &mut state,
                &Action::SelectNamespace(Some(Namespace::new("sales"))),
                Instant::now(),
            )
            .unwrap();

            assert_eq!(
                effects,
                vec![Effect::FetchTables {
                    namespace: Some(Namespace::new("sales"))
                }]
            );
            assert!(state.search.input.is_empty());
            assert!(state.catalog.tables_status.is_loading());
        }

        #[test]
        fn listing_for_superseded_namespace_is_dropped() {
            let mut state = create_test_state();
            state
                .catalog
                .select_namespace(Some(Namespace::new("finance")));

            reduce_catalog(
                &mut state,
                &Action::TablesLoaded {
                    namespace: Some(Namespace::new("sales")),
                    tables: vec![TableRef::new("sales", "orders")],
                },
                Instant::now(),
            );

            assert!(state.catalog.tables.is_empty());
        }

        #[test]
        fn listing_for_current_namespace_replaces_tables() {
            let mut state = create_test_state();
            state.ui.table_cursor = 5;

            reduce_catalog(
                &mut state,
                &Action::TablesLoaded {
                    namespace: None,
                    tables: vec![TableRef::new("a", "x"), TableRef::new("b", "y")],
                },
                Instant::now(),
            );

            assert_eq!(state.catalog.tables.len(), 2);
            assert_eq!(state.catalog.tables_status, LoadStatus::Loaded);
            assert_eq!(state.ui.table_cursor, 1);
        }

        #[test]
        fn namespaces_failure_is_kept_for_rendering() {
            let mut state = create_test_state();
            let error = CatalogError::Application("Catalog not reachable".into());

            reduce_catalog(
                &mut state,
                &Action::NamespacesFailed(error.clone()),
                Instant::now(),
            );

            assert_eq!(state.catalog.namespaces_status, LoadStatus::Failed(error));
        }
    }

    mod refresh_all {
        use super::*;

        #[test]
        fn refresh_is_ignored_while_in_progress() {
            let mut state = create_test_state();
            let now = Instant::now();

            let first = reduce_catalog(&mut state, &Action::RefreshAll, now).unwrap();
            let second = reduce_catalog(&mut state, &Action::RefreshAll, now).unwrap();

            assert_eq!(first, vec![Effect::RefreshAll { namespace: None }]);
            assert!(second.is_empty());
            assert!(state.refreshing);
        }

        #[test]
        fn settled_refresh_reenables_and_toasts_once() {
            let mut state = create_test_state();
            state.refreshing = true;

            reduce_catalog(&mut state, &Action::RefreshSettled, Instant::now());

            assert!(!state.refreshing);
            assert_eq!(state.toasts.visible().len(), 1);
            assert_eq!(
                state.toasts.visible()[0].message,
                "Data refreshed successfully"
            );
        }
    }
}
