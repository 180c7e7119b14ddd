pub use lakeview_app as app;
pub use lakeview_domain as domain;
pub use lakeview_infra as infra;
pub use lakeview_ui as ui;

pub mod error;
