//! Side effects returned by the reducer, executed by EffectRunner.

use crate::action::Action;
use crate::detail_state::SessionKey;
use lakeview_domain::{Namespace, TableRef};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render,

    CheckStatus,
    FetchOverview,
    FetchNamespaces,
    /// Result is tagged with `namespace` so a superseded listing can be dropped
    FetchTables {
        namespace: Option<Namespace>,
    },
    SearchTables {
        query: String,
    },

    /// Preview follows on success, issued by the reducer
    FetchTableInfo {
        table: TableRef,
        session: SessionKey,
    },
    FetchPreview {
        table: TableRef,
        session: SessionKey,
        request: u64,
        limit: u32,
    },
    ExecuteQuery {
        table: TableRef,
        session: SessionKey,
        query: String,
        limit: u32,
    },
    FetchStatistics {
        table: TableRef,
        session: SessionKey,
    },

    /// Overview, namespaces and tables joined, followed by `Action::RefreshSettled`
    RefreshAll {
        namespace: Option<Namespace>,
    },

    DispatchActions(Vec<Action>),
}
