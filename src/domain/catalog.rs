use std::fmt;

/// Opaque identifier grouping tables. Flat name, e.g. `sales` or `ops.archive`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one table. Two refs are equal iff namespace and name match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub namespace: Namespace,
    pub name: String,
}

impl TableRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Namespace::new(namespace),
            name: name.into(),
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceSummary {
    pub name: String,
    pub table_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overview {
    pub total_namespaces: u64,
    pub total_tables: u64,
    pub namespaces: Vec<NamespaceSummary>,
}

impl Overview {
    pub fn table_count(&self, namespace: &Namespace) -> Option<u64> {
        self.namespaces
            .iter()
            .find(|ns| ns.name == namespace.as_str())
            .map(|ns| ns.table_count)
    }
}

/// Tables matching a search term, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    pub count: u64,
    pub tables: Vec<TableRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BackendEndpoints {
    pub catalog_uri: Option<String>,
    pub storage_endpoint: Option<String>,
    pub warehouse_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub message: Option<String>,
    pub endpoints: Option<BackendEndpoints>,
}
