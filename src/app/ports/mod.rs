pub mod catalog_api;
pub mod renderer;

#[cfg(test)]
pub use catalog_api::MockCatalogApi;
pub use catalog_api::{CatalogApi, CatalogError};
pub use renderer::Renderer;
