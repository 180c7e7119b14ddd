use crate::detail_tab::DetailTab;
use crate::detail_state::SessionKey;
use crate::ports::CatalogError;
use lakeview_domain::{
    ConnectionStatus, Namespace, Overview, PreviewResult, QueryOutcome, SearchResults, TableInfo,
    TableRef, TableStatistics,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),
    /// Startup: status, overview, namespaces and all tables
    Init,

    // Focus and cursor
    FocusNext,
    FocusPrevious,
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    ConfirmSelection,

    // Catalog navigation
    SelectNamespace(Option<Namespace>),
    SelectTable(TableRef),
    RefreshAll,

    // Detail panels
    NextTab,
    PreviousTab,
    SelectTab(DetailTab),
    RefreshPreview,
    CyclePreviewLimit,
    ExecuteQuery,
    LoadStatistics,
    DismissError,

    // Search box
    EnterSearch,
    ExitSearch,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    /// Fired by the debouncer once typing settles
    SubmitSearch(String),

    // Query editor
    EnterQueryEditor,
    ExitQueryEditor,
    QueryInput(char),
    QueryBackspace,
    QueryClear,

    // Backend responses
    StatusChecked(ConnectionStatus),
    StatusCheckFailed(CatalogError),
    OverviewLoaded(Overview),
    OverviewFailed(CatalogError),
    NamespacesLoaded(Vec<Namespace>),
    NamespacesFailed(CatalogError),
    TablesLoaded {
        namespace: Option<Namespace>,
        tables: Vec<TableRef>,
    },
    TablesFailed {
        namespace: Option<Namespace>,
        error: CatalogError,
    },
    SearchCompleted {
        query: String,
        results: SearchResults,
    },
    SearchFailed {
        query: String,
        error: CatalogError,
    },
    TableInfoLoaded {
        session: SessionKey,
        info: Box<TableInfo>,
    },
    TableInfoFailed {
        session: SessionKey,
        error: CatalogError,
    },
    PreviewLoaded {
        session: SessionKey,
        request: u64,
        preview: Box<PreviewResult>,
    },
    PreviewFailed {
        session: SessionKey,
        request: u64,
        error: CatalogError,
    },
    QueryCompleted {
        session: SessionKey,
        outcome: Box<QueryOutcome>,
    },
    QueryFailed {
        session: SessionKey,
        error: CatalogError,
    },
    StatisticsLoaded {
        session: SessionKey,
        statistics: Box<TableStatistics>,
    },
    StatisticsFailed {
        session: SessionKey,
        error: CatalogError,
    },
    /// All three refresh-all calls have settled
    RefreshSettled,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
