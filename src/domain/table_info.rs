
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub required: bool,
    pub doc: Option<String>,
}

/// Table metadata and schema, fetched together and replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub namespace: Vec<String>,
    pub name: String,
    pub location: String,
    pub schema_id: i64,
    pub snapshots_count: u64,
    pub current_snapshot_id: Option<i64>,
    pub created_at: Option<String>,
    pub partition_spec: Option<String>,
    /// Backend order is preserved
    pub properties: Vec<(String, String)>,
    pub columns: Vec<Column>,
}

impl TableInfo {
    /// Empty namespace path means the catalog's root namespace.
    pub fn namespace_display(&self) -> String {
        if self.namespace.is_empty() {
            "default".to_string()
        } else {
            self.namespace.join(".")
        }
    }

    /// `None` when the spec is absent, blank, or the canonical empty list `[]`.
    pub fn visible_partition_spec(&self) -> Option<&str> {
        self.partition_spec
            .as_deref()
            .filter(|spec| !spec.trim().is_empty() && *spec != "[]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn info_with_spec(spec: Option<&str>) -> TableInfo {
        TableInfo {
            namespace: vec!["sales".to_string()],
            name: "orders".to_string(),
            location: "s3://warehouse/sales/orders".to_string(),
            schema_id: 0,
            snapshots_count: 0,
            current_snapshot_id: None,
            created_at: None,
            partition_spec: spec.map(str::to_string),
            properties: vec![],
            columns: vec![],
        }
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("[]"), None)]
    #[case(Some(""), None)]
    #[case(Some(r#"[{"field":1}]"#), Some(r#"[{"field":1}]"#))]
    fn visible_partition_spec_hides_empty_forms(
        #[case] spec: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(info_with_spec(spec).visible_partition_spec(), expected);
    }

    #[test]
    fn namespace_display_falls_back_to_default() {
        let mut info = info_with_spec(None);
        assert_eq!(info.namespace_display(), "sales");

        info.namespace = vec!["a".to_string(), "b".to_string()];
        assert_eq!(info.namespace_display(), "a.b");

        info.namespace.clear();
        assert_eq!(info.namespace_display(), "default");
    }
}
