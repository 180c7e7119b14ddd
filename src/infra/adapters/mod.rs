pub mod gateway;
pub mod http_catalog;
pub mod wire;

pub use gateway::HttpGateway;
pub use http_catalog::HttpCatalogApi;
