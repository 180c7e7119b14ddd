use std::fmt;

use serde::Deserialize;

/// A single value in a preview or query result row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    /// Nested values (lists, structs) are kept as raw JSON
    Other(serde_json::Value),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_row() {
        let row: Vec<CellValue> =
            serde_json::from_str(r#"["abc", 42, 1.5, true, null, [1, 2]]"#).unwrap();

        assert_eq!(row[0], CellValue::Text("abc".to_string()));
        assert_eq!(row[1], CellValue::from(42));
        assert!(matches!(row[2], CellValue::Number(_)));
        assert_eq!(row[3], CellValue::Bool(true));
        assert!(row[4].is_null());
        assert!(matches!(row[5], CellValue::Other(_)));
    }

    #[test]
    fn display_uses_compact_forms() {
        assert_eq!(CellValue::from(7).to_string(), "7");
        assert_eq!(CellValue::Bool(false).to_string(), "false");
        assert_eq!(CellValue::Null.to_string(), "null");
        assert_eq!(
            CellValue::Other(serde_json::json!({"a": 1})).to_string(),
            r#"{"a":1}"#
        );
    }
}
