use std::collections::HashMap;

use super::cell::CellValue;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviewResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub dtypes: HashMap<String, String>,
}

impl PreviewResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Declared types in column order; columns without a declared type are skipped.
    pub fn dtypes_in_column_order(&self) -> Vec<(&str, &str)> {
        self.columns
            .iter()
            .filter_map(|col| {
                self.dtypes
                    .get(col)
                    .map(|dtype| (col.as_str(), dtype.as_str()))
            })
            .collect()
    }
}
