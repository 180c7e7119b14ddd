use async_trait::async_trait;
use serde::Serialize;
use urlencoding::encode;

use lakeview_app::ports::{CatalogApi, CatalogError};
use lakeview_domain::{
    ConnectionStatus, Namespace, Overview, PreviewResult, QueryOutcome, SearchResults, TableInfo,
    TableRef, TableStatistics,
};

use super::gateway::{EnvelopeCheck, HttpGateway};
use super::wire::{
    NamespacesBody, OverviewBody, PreviewBody, QueryBody, SearchBody, StatisticsBody, StatusBody,
    TableInfoBody, TablesBody,
};

/// [`CatalogApi`] backed by the explorer's REST endpoints.
pub struct HttpCatalogApi {
    gateway: HttpGateway,
}

impl HttpCatalogApi {
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    limit: u32,
}

fn tables_path(namespace: Option<&Namespace>) -> String {
    match namespace {
        Some(ns) => format!("/tables?namespace={}", encode(ns.as_str())),
        None => "/tables".to_string(),
    }
}

fn search_path(query: &str) -> String {
    format!("/search?q={}", encode(query))
}

fn table_query_params(table: &TableRef) -> String {
    format!(
        "namespace={}&table={}",
        encode(table.namespace.as_str()),
        encode(&table.name)
    )
}

/// `/table/{ns}/{table}{suffix}` with both segments percent-encoded
fn table_path(table: &TableRef, suffix: &str) -> String {
    format!(
        "/table/{}/{}{}",
        encode(table.namespace.as_str()),
        encode(&table.name),
        suffix
    )
}

fn query_outcome(body: QueryBody) -> Result<QueryOutcome, CatalogError> {
    let result = body.query_result;
    if !result.success {
        return Err(CatalogError::Application(
            result
                .error
                .unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }
    Ok(result.result.unwrap_or_default().into())
}

fn table_statistics(body: StatisticsBody) -> Result<TableStatistics, CatalogError> {
    let Some(stats) = body.statistics else {
        return Err(CatalogError::Application(
            "Failed to load statistics".to_string(),
        ));
    };
    if let Some(error) = stats.error.clone() {
        return Err(CatalogError::Application(error));
    }
    Ok(stats.into())
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn status(&self) -> Result<ConnectionStatus, CatalogError> {
        let body: StatusBody = self.gateway.get("/status", EnvelopeCheck::Skip).await?;
        Ok(body.into())
    }

    async fn overview(&self) -> Result<Overview, CatalogError> {
        let body: OverviewBody = self.gateway.get("/overview", EnvelopeCheck::Required).await?;
        Ok(body.overview.into())
    }

    async fn namespaces(&self) -> Result<Vec<Namespace>, CatalogError> {
        let body: NamespacesBody = self
            .gateway
            .get("/namespaces", EnvelopeCheck::Required)
            .await?;
        Ok(body.into_domain())
    }

    async fn tables(&self, namespace: Option<Namespace>) -> Result<Vec<TableRef>, CatalogError> {
        let body: TablesBody = self
            .gateway
            .get(&tables_path(namespace.as_ref()), EnvelopeCheck::Required)
            .await?;
        Ok(body.into_domain())
    }

    async fn search(&self, query: &str) -> Result<SearchResults, CatalogError> {
        let body: SearchBody = self
            .gateway
            .get(&search_path(query), EnvelopeCheck::Required)
            .await?;
        Ok(body.into())
    }

    async fn table_info(&self, table: &TableRef) -> Result<TableInfo, CatalogError> {
        let path = format!("/table/info?{}", table_query_params(table));
        let body: TableInfoBody = self.gateway.get(&path, EnvelopeCheck::Required).await?;
        Ok(body.table_info.into())
    }

    async fn preview(&self, table: &TableRef, limit: u32) -> Result<PreviewResult, CatalogError> {
        let path = format!(
            "/table/preview?{}&limit={limit}",
            table_query_params(table)
        );
        let body: PreviewBody = self.gateway.get(&path, EnvelopeCheck::Required).await?;
        Ok(body.data.into())
    }

    async fn execute_query(
        &self,
        table: &TableRef,
        query: &str,
        limit: u32,
    ) -> Result<QueryOutcome, CatalogError> {
        let body: QueryBody = self
            .gateway
            .post(
                &table_path(table, "/query"),
                &QueryRequest { query, limit },
                EnvelopeCheck::Skip,
            )
            .await?;
        query_outcome(body)
    }

    async fn statistics(&self, table: &TableRef) -> Result<TableStatistics, CatalogError> {
        let body: StatisticsBody = self
            .gateway
            .get(&table_path(table, "/statistics"), EnvelopeCheck::Skip)
            .await?;
        table_statistics(body)
    }
}
