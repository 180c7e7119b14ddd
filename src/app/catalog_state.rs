//! Current selection and the cached namespace/table listings.

use crate::load_state::LoadStatus;
use lakeview_domain::{Namespace, Overview, TableRef};

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub overview: Option<Overview>,
    pub namespaces: Vec<Namespace>,
    pub namespaces_status: LoadStatus,
    pub tables: Vec<TableRef>,
    pub tables_status: LoadStatus,
    selected_namespace: Option<Namespace>,
    selected_table: Option<TableRef>,
}

impl CatalogState {
    /// `None` selects all namespaces. Listings are left untouched.
    pub fn select_namespace(&mut self, namespace: Option<Namespace>) {
        self.selected_namespace = namespace;
    }

    pub fn select_table(&mut self, table: TableRef) {
        self.selected_table = Some(table);
    }

    pub fn selected_namespace(&self) -> Option<&Namespace> {
        self.selected_namespace.as_ref()
    }

    pub fn selected_table(&self) -> Option<&TableRef> {
        self.selected_table.as_ref()
    }

    pub fn is_current_namespace(&self, namespace: Option<&Namespace>) -> bool {
        self.selected_namespace.as_ref() == namespace
    }

    pub fn replace_namespaces(&mut self, namespaces: Vec<Namespace>) {
        self.namespaces = namespaces;
        self.namespaces_status = LoadStatus::Loaded;
    }

    pub fn replace_tables(&mut self, tables: Vec<TableRef>) {
        self.tables = tables;
        self.tables_status = LoadStatus::Loaded;
    }
}
