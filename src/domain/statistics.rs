#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStatistics {
    Values {
        count: u64,
        distinct_count: u64,
        null_count: u64,
        null_percentage: f64,
    },
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableStatistics {
    pub engine: Option<String>,
    pub total_rows: u64,
    pub distinct_rows: u64,
    /// Backend order is preserved
    pub columns: Vec<(String, ColumnStatistics)>,
    pub note: Option<String>,
}

impl TableStatistics {
    pub fn engine_display(&self) -> &str {
        self.engine.as_deref().unwrap_or("duckdb")
    }
}
