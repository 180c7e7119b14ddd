//! Executes side effects returned by the reducer.
//!
//! Backend calls run in spawned tasks and report back as tagged `Action`s through
//! the action channel; the reducer decides whether the tag is still current.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tracing::debug;

use crate::action::Action;
use crate::effect::Effect;
use crate::ports::{CatalogApi, Renderer};
use crate::state::AppState;
use crate::view::compose;
use lakeview_domain::Namespace;

pub struct EffectRunner {
    catalog: Arc<dyn CatalogApi>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(catalog: Arc<dyn CatalogApi>, action_tx: mpsc::Sender<Action>) -> Self {
        Self { catalog, action_tx }
    }

    pub async fn run(
        &self,
        effects: Vec<Effect>,
        renderer: &mut impl Renderer,
        state: &AppState,
    ) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Render => renderer.draw(&compose(state))?,
                Effect::DispatchActions(actions) => {
                    for action in actions {
                        let _ = self.action_tx.send(action).await;
                    }
                }
                fetch => self.spawn_fetch(fetch),
            }
        }
        Ok(())
    }

    fn spawn_fetch(&self, effect: Effect) {
        debug!(?effect, "spawning fetch");
        let catalog = Arc::clone(&self.catalog);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            for action in perform(catalog.as_ref(), effect).await {
                if tx.send(action).await.is_err() {
                    break;
                }
            }
        });
    }
}

/// Runs one backend effect and converts every outcome into a tagged action.
async fn perform(catalog: &dyn CatalogApi, effect: Effect) -> Vec<Action> {
    match effect {
        Effect::CheckStatus => vec![match catalog.status().await {
            Ok(status) => Action::StatusChecked(status),
            Err(error) => Action::StatusCheckFailed(error),
        }],
        Effect::FetchOverview => vec![overview_action(catalog).await],
        Effect::FetchNamespaces => vec![namespaces_action(catalog).await],
        Effect::FetchTables { namespace } => vec![tables_action(catalog, namespace).await],
        Effect::SearchTables { query } => vec![match catalog.search(&query).await {
            Ok(results) => Action::SearchCompleted { query, results },
            Err(error) => Action::SearchFailed { query, error },
        }],
        Effect::FetchTableInfo { table, session } => {
            vec![match catalog.table_info(&table).await {
                Ok(info) => Action::TableInfoLoaded {
                    session,
                    info: Box::new(info),
                },
                Err(error) => Action::TableInfoFailed { session, error },
            }]
        }
        Effect::FetchPreview {
            table,
            session,
            request,
            limit,
        } => vec![match catalog.preview(&table, limit).await {
            Ok(preview) => Action::PreviewLoaded {
                session,
                request,
                preview: Box::new(preview),
            },
            Err(error) => Action::PreviewFailed {
                session,
                request,
                error,
            },
        }],
        Effect::ExecuteQuery {
            table,
            session,
            query,
            limit,
        } => vec![match catalog.execute_query(&table, &query, limit).await {
            Ok(outcome) => Action::QueryCompleted {
                session,
                outcome: Box::new(outcome),
            },
            Err(error) => Action::QueryFailed { session, error },
        }],
        Effect::FetchStatistics { table, session } => {
            vec![match catalog.statistics(&table).await {
                Ok(statistics) => Action::StatisticsLoaded {
                    session,
                    statistics: Box::new(statistics),
                },
                Err(error) => Action::StatisticsFailed { session, error },
            }]
        }
        Effect::RefreshAll { namespace } => {
            let (overview, namespaces, tables) = tokio::join!(
                overview_action(catalog),
                namespaces_action(catalog),
                tables_action(catalog, namespace),
            );
            vec![overview, namespaces, tables, Action::RefreshSettled]
        }
        Effect::Render | Effect::DispatchActions(_) => vec![],
    }
}

async fn overview_action(catalog: &dyn CatalogApi) -> Action {
    match catalog.overview().await {
        Ok(overview) => Action::OverviewLoaded(overview),
        Err(error) => Action::OverviewFailed(error),
    }
}

async fn namespaces_action(catalog: &dyn CatalogApi) -> Action {
    match catalog.namespaces().await {
        Ok(namespaces) => Action::NamespacesLoaded(namespaces),
        Err(error) => Action::NamespacesFailed(error),
    }
}

async fn tables_action(catalog: &dyn CatalogApi, namespace: Option<Namespace>) -> Action {
    match catalog.tables(namespace.clone()).await {
        Ok(tables) => Action::TablesLoaded { namespace, tables },
        Err(error) => Action::TablesFailed { namespace, error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail_state::SessionKey;
    use crate::ports::{CatalogError, MockCatalogApi};
    use crate::settings::Settings;
    use crate::view::Screen;
    use lakeview_domain::{Overview, QueryOutcome, TableRef};

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Screen>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, screen: &Screen) -> Result<()> {
            self.frames.push(screen.clone());
            Ok(())
        }
    }

    async fn run_effects(api: MockCatalogApi, effects: Vec<Effect>) -> mpsc::Receiver<Action> {
        let (tx, rx) = mpsc::channel(16);
        let runner = EffectRunner::new(Arc::new(api), tx);
        let state = AppState::new(Settings::default());
        let mut renderer = RecordingRenderer::default();
        runner.run(effects, &mut renderer, &state).await.unwrap();
        rx
    }

    #[tokio::test]
    async fn render_draws_composed_screen() {
        let (tx, _rx) = mpsc::channel(1);
        let runner = EffectRunner::new(Arc::new(MockCatalogApi::new()), tx);
        let state = AppState::new(Settings::default());
        let mut renderer = RecordingRenderer::default();

        runner
            .run(vec![Effect::Render], &mut renderer, &state)
            .await
            .unwrap();

        assert_eq!(renderer.frames.len(), 1);
        assert_eq!(renderer.frames[0].detail.title, "No table selected");
    }

    #[tokio::test]
    async fn dispatch_actions_are_forwarded_in_order() {
        let mut rx = run_effects(
            MockCatalogApi::new(),
            vec![Effect::DispatchActions(vec![Action::RefreshAll, Action::Quit])],
        )
        .await;

        assert_eq!(rx.recv().await, Some(Action::RefreshAll));
        assert_eq!(rx.recv().await, Some(Action::Quit));
    }

    #[tokio::test]
    async fn query_failure_is_tagged_with_session() {
        let mut api = MockCatalogApi::new();
        api.expect_execute_query()
            .returning(|_, _, _| Err(CatalogError::Application("syntax error".into())));
        let session = SessionKey::for_test(7);

        let mut rx = run_effects(
            api,
            vec![Effect::ExecuteQuery {
                table: TableRef::new("sales", "orders"),
                session,
                query: "SELEC".into(),
                limit: 100,
            }],
        )
        .await;

        assert_eq!(
            rx.recv().await,
            Some(Action::QueryFailed {
                session,
                error: CatalogError::Application("syntax error".into()),
            })
        );
    }

    #[tokio::test]
    async fn query_passes_limit_through() {
        let mut api = MockCatalogApi::new();
        api.expect_execute_query()
            .withf(|_, query, limit| query == "SELECT 1" && *limit == 50)
            .returning(|_, _, _| {
                Ok(QueryOutcome {
                    row_count: 1,
                    engine: Some("duckdb".into()),
                    columns: vec!["1".into()],
                    rows: vec![],
                })
            });

        let mut rx = run_effects(
            api,
            vec![Effect::ExecuteQuery {
                table: TableRef::new("sales", "orders"),
                session: SessionKey::for_test(1),
                query: "SELECT 1".into(),
                limit: 50,
            }],
        )
        .await;

        assert!(matches!(rx.recv().await, Some(Action::QueryCompleted { .. })));
    }

    #[tokio::test]
    async fn tables_result_is_tagged_with_namespace() {
        let mut api = MockCatalogApi::new();
        api.expect_tables()
            .returning(|_| Ok(vec![TableRef::new("sales", "orders")]));

        let mut rx = run_effects(
            api,
            vec![Effect::FetchTables {
                namespace: Some(Namespace::new("sales")),
            }],
        )
        .await;

        assert_eq!(
            rx.recv().await,
            Some(Action::TablesLoaded {
                namespace: Some(Namespace::new("sales")),
                tables: vec![TableRef::new("sales", "orders")],
            })
        );
    }

    #[tokio::test]
    async fn refresh_all_settles_once_after_every_call() {
        let mut api = MockCatalogApi::new();
        api.expect_overview()
            .times(1)
            .returning(|| Ok(Overview::default()));
        api.expect_namespaces()
            .times(1)
            .returning(|| Err(CatalogError::Network("HTTP 503".into())));
        api.expect_tables().times(1).returning(|_| Ok(vec![]));

        let mut rx = run_effects(api, vec![Effect::RefreshAll { namespace: None }]).await;

        let mut received = vec![];
        for _ in 0..4 {
            received.push(rx.recv().await.unwrap());
        }
        assert!(matches!(received[0], Action::OverviewLoaded(_)));
        assert!(matches!(received[1], Action::NamespacesFailed(_)));
        assert!(matches!(received[2], Action::TablesLoaded { .. }));
        assert_eq!(received[3], Action::RefreshSettled);
    }
}
