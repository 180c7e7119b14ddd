//! JSON shapes returned by the catalog backend and their conversion into domain types.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use lakeview_domain::{
    BackendEndpoints, CellValue, Column, ColumnStatistics, ConnectionStatus, Namespace,
    NamespaceSummary, Overview, PreviewResult, QueryOutcome, SearchResults, TableInfo, TableRef,
    TableStatistics,
};

/// Fields shared by every enveloped response. Kept loose so a missing or
/// mistyped discriminator still decodes and is reported as a failure.
#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl Envelope {
    /// `None` only when `status` is exactly the string `"success"`.
    pub fn failure(self) -> Option<String> {
        if self.status.as_ref().and_then(Value::as_str) == Some("success") {
            return None;
        }
        Some(
            self.message
                .as_ref()
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or("Unknown error")
                .to_string(),
        )
    }
}

/// Body of a non-2xx response. Either field may carry the reason.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn detail(self) -> Option<String> {
        self.error.or(self.message).filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub config: Option<ConfigBody>,
}

#[derive(Debug, Deserialize)]
pub struct ConfigBody {
    #[serde(default)]
    pub nessie_uri: Option<String>,
    #[serde(default)]
    pub s3_endpoint: Option<String>,
    #[serde(default)]
    pub warehouse_path: Option<String>,
}

impl From<StatusBody> for ConnectionStatus {
    fn from(body: StatusBody) -> Self {
        Self {
            connected: body.connected,
            message: body.message,
            endpoints: body.config.map(|c| BackendEndpoints {
                catalog_uri: c.nessie_uri,
                storage_endpoint: c.s3_endpoint,
                warehouse_path: c.warehouse_path,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OverviewBody {
    pub overview: OverviewWire,
}

#[derive(Debug, Deserialize)]
pub struct OverviewWire {
    #[serde(default)]
    pub total_namespaces: u64,
    #[serde(default)]
    pub total_tables: u64,
    #[serde(default)]
    pub namespaces: Vec<NamespaceWire>,
}

#[derive(Debug, Deserialize)]
pub struct NamespaceWire {
    pub name: String,
    #[serde(default)]
    pub table_count: u64,
}

impl From<OverviewWire> for Overview {
    fn from(wire: OverviewWire) -> Self {
        Self {
            total_namespaces: wire.total_namespaces,
            total_tables: wire.total_tables,
            namespaces: wire
                .namespaces
                .into_iter()
                .map(|ns| NamespaceSummary {
                    name: ns.name,
                    table_count: ns.table_count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NamespacesBody {
    #[serde(default)]
    pub namespaces: Vec<String>,
}

impl NamespacesBody {
    pub fn into_domain(self) -> Vec<Namespace> {
        self.namespaces.into_iter().map(Namespace::new).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct TableEntry {
    pub namespace: String,
    pub name: String,
}

impl From<TableEntry> for TableRef {
    fn from(entry: TableEntry) -> Self {
        Self::new(entry.namespace, entry.name)
    }
}

#[derive(Debug, Deserialize)]
pub struct TablesBody {
    #[serde(default)]
    pub tables: Vec<TableEntry>,
}

impl TablesBody {
    pub fn into_domain(self) -> Vec<TableRef> {
        self.tables.into_iter().map(TableRef::from).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub results: Vec<TableEntry>,
}

impl From<SearchBody> for SearchResults {
    fn from(body: SearchBody) -> Self {
        let tables: Vec<TableRef> = body.results.into_iter().map(TableRef::from).collect();
        Self {
            count: body.count.unwrap_or(tables.len() as u64),
            tables,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TableInfoBody {
    pub table_info: TableInfoWire,
}

#[derive(Debug, Deserialize)]
pub struct TableInfoWire {
    #[serde(default)]
    pub namespace: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub schema_id: i64,
    #[serde(default)]
    pub snapshots_count: u64,
    #[serde(default)]
    pub current_snapshot_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub partition_spec: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub columns: Vec<ColumnWire>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnWire {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub doc: Option<String>,
}

impl From<TableInfoWire> for TableInfo {
    fn from(wire: TableInfoWire) -> Self {
        Self {
            namespace: wire.namespace,
            name: wire.name,
            location: wire.location,
            schema_id: wire.schema_id,
            snapshots_count: wire.snapshots_count,
            current_snapshot_id: wire.current_snapshot_id,
            created_at: wire.created_at,
            partition_spec: wire.partition_spec,
            properties: wire
                .properties
                .into_iter()
                .map(|(key, value)| (key, plain_text(value)))
                .collect(),
            columns: wire
                .columns
                .into_iter()
                .map(|c| Column {
                    name: c.name,
                    data_type: c.data_type,
                    required: c.required,
                    doc: c.doc.filter(|d| !d.is_empty()),
                })
                .collect(),
        }
    }
}

/// Strings without quotes, everything else as compact JSON.
fn plain_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub struct PreviewBody {
    pub data: PreviewWire,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewWire {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
    #[serde(default)]
    pub dtypes: HashMap<String, String>,
}

impl From<PreviewWire> for PreviewResult {
    fn from(wire: PreviewWire) -> Self {
        Self {
            columns: wire.columns,
            rows: wire.rows,
            dtypes: wire.dtypes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryBody {
    pub query_result: QueryResultWire,
}

#[derive(Debug, Deserialize)]
pub struct QueryResultWire {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<QueryRowsWire>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryRowsWire {
    #[serde(default)]
    pub row_count: Option<u64>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<CellValue>>,
}

impl From<QueryRowsWire> for QueryOutcome {
    fn from(wire: QueryRowsWire) -> Self {
        Self {
            row_count: wire.row_count.unwrap_or(wire.data.len() as u64),
            engine: wire.engine,
            columns: wire.columns,
            rows: wire.data,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatisticsBody {
    #[serde(default)]
    pub statistics: Option<StatisticsWire>,
}

#[derive(Debug, Deserialize)]
pub struct StatisticsWire {
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub distinct_rows: u64,
    #[serde(default)]
    pub column_statistics: Map<String, Value>,
    #[serde(default)]
    pub note: Option<String>,
    /// Set when the backend could not compute anything at all
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColumnStatisticsWire {
    Failed {
        error: String,
    },
    Values {
        #[serde(default)]
        count: u64,
        #[serde(default)]
        distinct_count: u64,
        #[serde(default)]
        null_count: u64,
        #[serde(default)]
        null_percentage: f64,
    },
}

impl From<ColumnStatisticsWire> for ColumnStatistics {
    fn from(wire: ColumnStatisticsWire) -> Self {
        match wire {
            ColumnStatisticsWire::Failed { error } => Self::Error(error),
            ColumnStatisticsWire::Values {
                count,
                distinct_count,
                null_count,
                null_percentage,
            } => Self::Values {
                count,
                distinct_count,
                null_count,
                null_percentage,
            },
        }
    }
}

impl From<StatisticsWire> for TableStatistics {
    fn from(wire: StatisticsWire) -> Self {
        let columns = wire
            .column_statistics
            .into_iter()
            .map(|(name, value)| {
                let stats = serde_json::from_value::<ColumnStatisticsWire>(value).map_or_else(
                    |e| ColumnStatistics::Error(format!("Unreadable statistics: {e}")),
                    ColumnStatistics::from,
                );
                (name, stats)
            })
            .collect();

        Self {
            engine: wire.engine,
            total_rows: wire.total_rows,
            distinct_rows: wire.distinct_rows,
            columns,
            note: wire.note,
        }
    }
}
