use std::collections::HashMap;

use lakeview::domain::{
    BackendEndpoints, CellValue, Column, ColumnStatistics, ConnectionStatus, Namespace,
    NamespaceSummary, Overview, PreviewResult, QueryOutcome, TableInfo, TableRef, TableStatistics,
};

pub fn sample_namespaces() -> Vec<Namespace> {
    vec![Namespace::new("sales"), Namespace::new("ops")]
}

pub fn sample_overview() -> Overview {
    Overview {
        total_namespaces: 2,
        total_tables: 3,
        namespaces: vec![
            NamespaceSummary {
                name: "sales".to_string(),
                table_count: 2,
            },
            NamespaceSummary {
                name: "ops".to_string(),
                table_count: 1,
            },
        ],
    }
}

pub fn sample_tables() -> Vec<TableRef> {
    vec![
        TableRef::new("sales", "orders"),
        TableRef::new("sales", "customers"),
        TableRef::new("ops", "events"),
    ]
}

pub fn connected_status() -> ConnectionStatus {
    ConnectionStatus {
        connected: true,
        message: Some("Connected to lakehouse".to_string()),
        endpoints: Some(BackendEndpoints {
            catalog_uri: Some("http://nessie:19120/api/v1".to_string()),
            storage_endpoint: Some("http://minio:9000".to_string()),
            warehouse_path: Some("s3://warehouse".to_string()),
        }),
    }
}

pub fn sample_table_info(partition_spec: &str) -> TableInfo {
    TableInfo {
        namespace: vec!["sales".to_string()],
        name: "orders".to_string(),
        location: "s3://warehouse/sales/orders".to_string(),
        schema_id: 0,
        snapshots_count: 4,
        current_snapshot_id: Some(8_812_345),
        created_at: Some("2024-03-01T12:00:00".to_string()),
        partition_spec: Some(partition_spec.to_string()),
        properties: vec![("write.format.default".to_string(), "parquet".to_string())],
        columns: vec![
            Column {
                name: "order_id".to_string(),
                data_type: "long".to_string(),
                required: true,
                doc: None,
            },
            Column {
                name: "note".to_string(),
                data_type: "string".to_string(),
                required: false,
                doc: Some("free text".to_string()),
            },
        ],
    }
}

pub fn sample_preview(note: &str) -> PreviewResult {
    PreviewResult {
        columns: vec!["order_id".to_string(), "note".to_string()],
        rows: vec![
            vec![CellValue::from(1_i64), CellValue::from(note)],
            vec![CellValue::from(2_i64), CellValue::Null],
        ],
        dtypes: HashMap::from([
            ("order_id".to_string(), "int64".to_string()),
            ("note".to_string(), "object".to_string()),
        ]),
    }
}

pub fn sample_statistics() -> TableStatistics {
    TableStatistics {
        engine: Some("duckdb".to_string()),
        total_rows: 1200,
        distinct_rows: 1100,
        columns: vec![
            (
                "name".to_string(),
                ColumnStatistics::Values {
                    count: 1200,
                    distinct_count: 900,
                    null_count: 12,
                    null_percentage: 1.0,
                },
            ),
            (
                "age".to_string(),
                ColumnStatistics::Error("unsupported type".to_string()),
            ),
        ],
        note: None,
    }
}

pub fn sample_query_outcome() -> QueryOutcome {
    QueryOutcome {
        row_count: 1,
        engine: None,
        columns: vec!["n".to_string()],
        rows: vec![vec![CellValue::from(42_i64)]],
    }
}
