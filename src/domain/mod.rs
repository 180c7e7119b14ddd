pub mod catalog;
pub mod cell;
pub mod preview;
pub mod query_result;
pub mod statistics;
pub mod table_info;

pub use catalog::{
    BackendEndpoints, ConnectionStatus, Namespace, NamespaceSummary, Overview, SearchResults,
    TableRef,
};
pub use cell::CellValue;
pub use preview::PreviewResult;
pub use query_result::QueryOutcome;
pub use statistics::{ColumnStatistics, TableStatistics};
pub use table_info::{Column, TableInfo};
