use crate::detail_tab::DetailTab;
use crate::focused_pane::FocusedPane;
use crate::input_mode::InputMode;
use crate::state::AppState;
use crate::toast_state::ToastKind;

use super::format::group_thousands;
use super::panels::{
    info_nodes, namespace_panel, preview_nodes, query_nodes, schema_nodes, statistics_nodes,
    status_view, table_panel,
};
use super::tree::{
    CellView, DetailView, Field, HeaderView, KeyHint, Screen, SearchView, TabView, ToastView, Tone,
};

pub const APP_TITLE: &str = "Lakehouse Explorer";

/// Projects the whole state onto one frame's view tree.
pub fn compose(state: &AppState) -> Screen {
    let focused = state.ui.focused_pane;

    Screen {
        header: header(state),
        namespaces: namespace_panel(
            &state.catalog,
            state.ui.namespace_cursor,
            focused == FocusedPane::Namespaces,
        ),
        tables: table_panel(
            &state.catalog,
            &state.search,
            state.ui.table_cursor,
            focused == FocusedPane::Tables,
        ),
        search: SearchView {
            value: state.search.input.clone(),
            editing: state.ui.input_mode == InputMode::Search,
        },
        detail: detail(state),
        inline_error: state.inline_error.clone(),
        toasts: state
            .toasts
            .visible()
            .iter()
            .map(|toast| ToastView {
                title: toast.title.clone(),
                message: toast.message.clone(),
                tone: match toast.kind {
                    ToastKind::Success => Tone::Success,
                    ToastKind::Error => Tone::Danger,
                    ToastKind::Info => Tone::Info,
                },
            })
            .collect(),
        footer: key_hints(state),
    }
}

fn header(state: &AppState) -> HeaderView {
    let endpoints: Vec<Field> = state
        .endpoints
        .as_ref()
        .map(|e| {
            [
                ("Catalog", &e.catalog_uri),
                ("Storage", &e.storage_endpoint),
                ("Warehouse", &e.warehouse_path),
            ]
            .into_iter()
            .filter_map(|(label, value)| {
                value
                    .as_ref()
                    .map(|v| Field::new(label, CellView::Text(v.clone())))
            })
            .collect()
        })
        .unwrap_or_default();

    HeaderView {
        title: APP_TITLE.to_string(),
        status: status_view(&state.connection),
        summary: state.catalog.overview.as_ref().map(|o| {
            format!(
                "Namespaces: {} | Tables: {}",
                group_thousands(o.total_namespaces),
                group_thousands(o.total_tables)
            )
        }),
        endpoints,
        refreshing: state.refreshing,
    }
}

fn detail(state: &AppState) -> DetailView {
    let detail = &state.detail;
    let body = match detail.tab {
        DetailTab::Info => info_nodes(&detail.info),
        DetailTab::Schema => schema_nodes(&detail.info),
        DetailTab::Preview => preview_nodes(&detail.preview, detail.preview_limit),
        DetailTab::Query => query_nodes(
            &detail.query,
            state.ui.input_mode == InputMode::QueryEditor,
        ),
        DetailTab::Statistics => statistics_nodes(&detail.statistics),
    };

    DetailView {
        title: state
            .catalog
            .selected_table()
            .map_or_else(|| "No table selected".to_string(), |t| t.qualified_name()),
        tabs: DetailTab::all()
            .iter()
            .map(|tab| TabView {
                label: tab.display_name().to_string(),
                active: *tab == detail.tab,
            })
            .collect(),
        body,
        scroll: state.ui.detail_scroll,
        focused: state.ui.focused_pane == FocusedPane::Detail,
    }
}

fn key_hints(state: &AppState) -> Vec<KeyHint> {
    let hint = |key, description| KeyHint { key, description };
    match state.ui.input_mode {
        InputMode::Search => vec![
            hint("type", "filter"),
            hint("^U", "clear"),
            hint("Enter/Esc", "done"),
        ],
        InputMode::QueryEditor => vec![
            hint("Enter", "execute"),
            hint("^U", "clear"),
            hint("Esc", "done"),
        ],
        InputMode::Normal => {
            let mut hints = vec![
                hint("q", "quit"),
                hint("Tab", "focus"),
                hint("Enter", "open"),
                hint("/", "search"),
                hint("r", "refresh"),
                hint("[ ]", "tab"),
            ];
            if state.catalog.selected_table().is_some() {
                hints.extend([
                    hint("p", "preview"),
                    hint("l", "limit"),
                    hint("i", "query"),
                    hint("s", "stats"),
                ]);
            }
            if state.inline_error.is_some() {
                hints.push(hint("x", "dismiss"));
            }
            hints
        }
    }
}
