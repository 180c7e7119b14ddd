use async_trait::async_trait;
use thiserror::Error;

use lakeview_domain::{
    ConnectionStatus, Namespace, Overview, PreviewResult, QueryOutcome, SearchResults, TableInfo,
    TableRef, TableStatistics,
};

/// Failure of a catalog call, surfaced as a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport failure, non-2xx status or an undecodable body
    #[error("{0}")]
    Network(String),
    /// The backend answered but reported a failure
    #[error("{0}")]
    Application(String),
    /// Rejected locally before any request was made
    #[error("{0}")]
    Validation(String),
}

impl CatalogError {
    pub fn message(&self) -> &str {
        match self {
            Self::Network(msg) | Self::Application(msg) | Self::Validation(msg) => msg,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn status(&self) -> Result<ConnectionStatus, CatalogError>;

    async fn overview(&self) -> Result<Overview, CatalogError>;

    async fn namespaces(&self) -> Result<Vec<Namespace>, CatalogError>;

    /// `None` lists tables across every namespace.
    async fn tables(&self, namespace: Option<Namespace>) -> Result<Vec<TableRef>, CatalogError>;

    async fn search(&self, query: &str) -> Result<SearchResults, CatalogError>;

    async fn table_info(&self, table: &TableRef) -> Result<TableInfo, CatalogError>;

    async fn preview(&self, table: &TableRef, limit: u32) -> Result<PreviewResult, CatalogError>;

    async fn execute_query(
        &self,
        table: &TableRef,
        query: &str,
        limit: u32,
    ) -> Result<QueryOutcome, CatalogError>;

    async fn statistics(&self, table: &TableRef) -> Result<TableStatistics, CatalogError>;
}
