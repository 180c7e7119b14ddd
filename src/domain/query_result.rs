use super::cell::CellValue;

/// Successful ad-hoc query output. Failed queries surface as errors instead.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    /// Row count as reported by the backend (may exceed `rows.len()` when limited)
    pub row_count: u64,
    pub engine: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl QueryOutcome {
    pub const DEFAULT_ENGINE: &'static str = "duckdb";

    pub fn engine_display(&self) -> &str {
        self.engine.as_deref().unwrap_or(Self::DEFAULT_ENGINE)
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}
