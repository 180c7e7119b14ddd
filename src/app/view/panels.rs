//! Pure projections from state and fetched payloads to view nodes, one per panel.

use crate::catalog_state::CatalogState;
use crate::connection_state::ConnectionIndicator;
use crate::detail_state::{QueryPanel, StatisticsPanel};
use crate::load_state::{LoadStatus, Panel};
use crate::ports::CatalogError;
use crate::search_state::{SearchOutcome, SearchState};
use lakeview_domain::{
    CellValue, ColumnStatistics, Namespace, PreviewResult, QueryOutcome, TableInfo, TableRef,
    TableStatistics,
};

use super::format::{format_cell, format_percent, group_thousands};
use super::tree::{
    Badge, CellView, Field, ListEntry, PanelView, RowView, StatusView, TableView, Tone, ViewNode,
};

/// Panel-local error text. `thing` names what was being loaded.
pub fn failure_text(thing: &str, error: &CatalogError) -> String {
    match error {
        CatalogError::Application(msg) => format!("Error: {msg}"),
        CatalogError::Network(msg) => format!("Failed to load {thing}: {msg}"),
        CatalogError::Validation(msg) => msg.clone(),
    }
}

pub fn status_view(indicator: &ConnectionIndicator) -> StatusView {
    let tone = match indicator {
        ConnectionIndicator::Checking => Tone::Info,
        ConnectionIndicator::Connected => Tone::Success,
        ConnectionIndicator::Disconnected(_) | ConnectionIndicator::CheckFailed => Tone::Danger,
    };
    StatusView {
        label: indicator.label().to_string(),
        tone,
    }
}

pub fn namespace_panel(catalog: &CatalogState, cursor: usize, focused: bool) -> PanelView {
    let mut panel = PanelView {
        title: "Namespaces".to_string(),
        nodes: vec![],
        cursor: None,
        focused,
    };

    match &catalog.namespaces_status {
        LoadStatus::Loading if catalog.namespaces.is_empty() => {
            panel.nodes.push(ViewNode::loading());
        }
        LoadStatus::Failed(error) => {
            panel
                .nodes
                .push(ViewNode::alert(Tone::Danger, failure_text("namespaces", error)));
        }
        LoadStatus::Loaded if catalog.namespaces.is_empty() => {
            panel.nodes.push(ViewNode::Muted("No namespaces found".to_string()));
        }
        _ => {
            let selected = catalog.selected_namespace();
            let overview = catalog.overview.as_ref();
            let mut entries = vec![ListEntry {
                label: "All Namespaces".to_string(),
                detail: overview.map(|o| group_thousands(o.total_tables)),
                active: selected.is_none(),
            }];
            entries.extend(catalog.namespaces.iter().map(|ns| ListEntry {
                label: ns.to_string(),
                detail: overview
                    .and_then(|o| o.table_count(ns))
                    .map(group_thousands),
                active: selected == Some(ns),
            }));
            panel.nodes.push(ViewNode::List(entries));
            panel.cursor = Some(cursor);
        }
    }

    panel
}

pub fn table_list_title(search: &SearchState, namespace: Option<&Namespace>) -> String {
    match (&search.outcome, namespace) {
        (Some(SearchOutcome::Found(results)), _) => {
            format!("Search Results ({} found)", results.count)
        }
        (Some(SearchOutcome::Failed(_)), _) => "Search Results".to_string(),
        (None, Some(ns)) => format!("Tables in {ns}"),
        (None, None) => "All Tables".to_string(),
    }
}

pub fn table_panel(
    catalog: &CatalogState,
    search: &SearchState,
    cursor: usize,
    focused: bool,
) -> PanelView {
    let mut panel = PanelView {
        title: table_list_title(search, catalog.selected_namespace()),
        nodes: vec![],
        cursor: None,
        focused,
    };

    let tables = match &search.outcome {
        Some(SearchOutcome::Failed(error)) => {
            let message = match error {
                CatalogError::Network(_) => "Search failed".to_string(),
                other => format!("Search error: {}", other.message()),
            };
            panel.nodes.push(ViewNode::alert(Tone::Danger, message));
            return panel;
        }
        Some(SearchOutcome::Found(results)) => &results.tables,
        None => match &catalog.tables_status {
            LoadStatus::Loading => {
                panel.nodes.push(ViewNode::loading());
                return panel;
            }
            LoadStatus::Failed(error) => {
                panel
                    .nodes
                    .push(ViewNode::alert(Tone::Danger, failure_text("tables", error)));
                return panel;
            }
            _ => &catalog.tables,
        },
    };

    if tables.is_empty() {
        panel.nodes.push(ViewNode::Muted("No tables found".to_string()));
        return panel;
    }

    let selected = catalog.selected_table();
    panel.nodes.push(ViewNode::List(
        tables.iter().map(|t| table_entry(t, selected)).collect(),
    ));
    panel.cursor = Some(cursor);
    panel
}

fn table_entry(table: &TableRef, selected: Option<&TableRef>) -> ListEntry {
    ListEntry {
        label: table.name.clone(),
        detail: Some(table.namespace.to_string()),
        active: selected == Some(table),
    }
}

pub fn info_nodes(panel: &Panel<TableInfo>) -> Vec<ViewNode> {
    let info = match panel {
        Panel::Empty => return vec![ViewNode::Muted("Select a table to see its details".into())],
        Panel::Loading => return vec![ViewNode::loading()],
        Panel::Failed(error) => {
            return vec![ViewNode::alert(
                Tone::Danger,
                failure_text("table information", error),
            )];
        }
        Panel::Ready(info) => info,
    };

    let mut nodes = vec![ViewNode::Fields(vec![
        Field::new("Namespace", CellView::Text(info.namespace_display())),
        Field::new("Table Name", CellView::Text(info.name.clone())),
        Field::new("Location", CellView::Text(info.location.clone())),
        Field::new("Schema ID", CellView::Text(info.schema_id.to_string())),
        Field::new("Snapshots", CellView::Text(info.snapshots_count.to_string())),
        Field::new(
            "Current Snapshot",
            CellView::Text(
                info.current_snapshot_id
                    .map_or_else(|| "None".to_string(), |id| id.to_string()),
            ),
        ),
        Field::new(
            "Created",
            CellView::Text(info.created_at.clone().unwrap_or_else(|| "Unknown".into())),
        ),
    ])];

    if let Some(spec) = info.visible_partition_spec() {
        nodes.push(ViewNode::Heading("Partition Specification".into()));
        nodes.push(ViewNode::Pre(spec.to_string()));
    }

    if !info.properties.is_empty() {
        nodes.push(ViewNode::Heading("Properties".into()));
        nodes.push(ViewNode::Table(TableView {
            headers: vec!["Property".into(), "Value".into()],
            rows: info
                .properties
                .iter()
                .map(|(k, v)| {
                    RowView::Cells(vec![CellView::Strong(k.clone()), CellView::Text(v.clone())])
                })
                .collect(),
        }));
    }

    nodes
}

pub fn schema_nodes(panel: &Panel<TableInfo>) -> Vec<ViewNode> {
    let info = match panel {
        Panel::Ready(info) => info,
        other => return info_nodes(other),
    };

    if info.columns.is_empty() {
        return vec![ViewNode::Muted("No schema information available".into())];
    }

    let rows = info
        .columns
        .iter()
        .map(|col| {
            let badge = if col.required {
                Badge {
                    label: "Required".into(),
                    tone: Tone::Success,
                }
            } else {
                Badge {
                    label: "Optional".into(),
                    tone: Tone::Secondary,
                }
            };
            RowView::Cells(vec![
                CellView::Strong(col.name.clone()),
                CellView::Code(col.data_type.clone()),
                CellView::Badge(badge),
                col.doc
                    .clone()
                    .map_or_else(|| CellView::Placeholder("No description".into()), CellView::Text),
            ])
        })
        .collect();

    vec![ViewNode::Table(TableView {
        headers: vec![
            "Column Name".into(),
            "Data Type".into(),
            "Required".into(),
            "Description".into(),
        ],
        rows,
    })]
}

pub fn preview_nodes(panel: &Panel<PreviewResult>, limit: u32) -> Vec<ViewNode> {
    let mut nodes = vec![ViewNode::Muted(format!("Row limit: {limit}"))];

    match panel {
        Panel::Empty => {}
        Panel::Loading => nodes.push(ViewNode::loading()),
        Panel::Failed(error) => nodes.push(ViewNode::alert(
            Tone::Danger,
            failure_text("table preview", error),
        )),
        Panel::Ready(preview) if preview.is_empty() => nodes.push(ViewNode::alert(
            Tone::Info,
            "No data available or table is empty",
        )),
        Panel::Ready(preview) => {
            nodes.push(ViewNode::Muted(format!(
                "Showing {} rows × {} columns",
                preview.rows.len(),
                preview.columns.len()
            )));
            nodes.push(ViewNode::Table(cells_table(&preview.columns, &preview.rows)));

            let dtypes = preview.dtypes_in_column_order();
            if !dtypes.is_empty() {
                nodes.push(ViewNode::Heading("Data Types".into()));
                nodes.push(ViewNode::Fields(
                    dtypes
                        .into_iter()
                        .map(|(col, dtype)| Field::new(col, CellView::Code(dtype.to_string())))
                        .collect(),
                ));
            }
        }
    }

    nodes
}

fn cells_table(columns: &[String], rows: &[Vec<CellValue>]) -> TableView {
    TableView {
        headers: columns.to_vec(),
        rows: rows
            .iter()
            .map(|row| RowView::Cells(row.iter().map(format_cell).collect()))
            .collect(),
    }
}

pub fn query_nodes(query: &QueryPanel, editing: bool) -> Vec<ViewNode> {
    let mut nodes = vec![
        ViewNode::Input {
            label: "SQL".into(),
            value: query.text.clone(),
            focused: editing,
        },
        ViewNode::Button {
            label: if query.running {
                "Executing...".into()
            } else {
                "Execute".into()
            },
            enabled: !query.running,
        },
    ];

    if let Some(outcome) = &query.result {
        nodes.extend(query_result_nodes(outcome));
    }
    nodes
}

pub fn query_result_nodes(outcome: &QueryOutcome) -> Vec<ViewNode> {
    let mut nodes = vec![
        ViewNode::Heading("Query Results".into()),
        ViewNode::Text(format!(
            "Rows: {} | Engine: {}",
            outcome.row_count,
            outcome.engine_display()
        )),
    ];
    if outcome.has_rows() {
        nodes.push(ViewNode::Table(cells_table(&outcome.columns, &outcome.rows)));
    } else {
        nodes.push(ViewNode::Muted("No data returned".into()));
    }
    nodes
}

pub fn statistics_nodes(panel: &StatisticsPanel) -> Vec<ViewNode> {
    let mut nodes = vec![ViewNode::Button {
        label: if panel.loading {
            "Loading...".into()
        } else {
            "Load Statistics".into()
        },
        enabled: !panel.loading,
    }];

    if let Some(stats) = &panel.data {
        nodes.extend(table_statistics_nodes(stats));
    }
    nodes
}

pub fn table_statistics_nodes(stats: &TableStatistics) -> Vec<ViewNode> {
    let mut nodes = vec![
        ViewNode::Heading("Table Statistics".into()),
        ViewNode::Muted(format!("Engine: {}", stats.engine_display())),
        ViewNode::Fields(vec![
            Field::new("Total Rows", CellView::Text(group_thousands(stats.total_rows))),
            Field::new(
                "Distinct Rows",
                CellView::Text(group_thousands(stats.distinct_rows)),
            ),
        ]),
    ];

    if !stats.columns.is_empty() {
        nodes.push(ViewNode::Heading("Column Statistics".into()));
        nodes.push(ViewNode::Table(TableView {
            headers: ["Column", "Count", "Distinct", "Nulls", "Null %"]
                .into_iter()
                .map(String::from)
                .collect(),
            rows: stats
                .columns
                .iter()
                .map(|(name, col)| column_statistics_row(name, col))
                .collect(),
        }));
    }

    if let Some(note) = &stats.note {
        nodes.push(ViewNode::Muted(note.clone()));
    }
    nodes
}

fn column_statistics_row(name: &str, stats: &ColumnStatistics) -> RowView {
    match stats {
        ColumnStatistics::Values {
            count,
            distinct_count,
            null_count,
            null_percentage,
        } => RowView::Cells(vec![
            CellView::Strong(name.to_string()),
            CellView::Text(group_thousands(*count)),
            CellView::Text(group_thousands(*distinct_count)),
            CellView::Text(group_thousands(*null_count)),
            CellView::Text(format_percent(*null_percentage)),
        ]),
        ColumnStatistics::Error(message) => RowView::Spanning {
            lead: CellView::Text(name.to_string()),
            message: format!("Error: {message}"),
        },
    }
}
