pub mod atoms;
pub mod catalog_panel;
pub mod detail;
pub mod footer;
pub mod header;
pub mod layout;
pub mod search_bar;
pub mod text_utils;
pub mod toast;
pub mod view_nodes;
