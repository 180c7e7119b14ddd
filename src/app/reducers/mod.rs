mod catalog;
mod detail;
mod navigation;
mod search;

pub use catalog::reduce_catalog;
pub use detail::{query_error_text, reduce_detail, statistics_error_text};
pub use navigation::reduce_navigation;
pub use search::reduce_search;
