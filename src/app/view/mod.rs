//! State → view projection. Nothing here touches the terminal.

pub mod format;
pub mod panels;
pub mod screen;
pub mod tree;

pub use screen::compose;
pub use tree::{
    Badge, CellView, DetailView, Field, HeaderView, KeyHint, ListEntry, PanelView, RowView,
    Screen, SearchView, StatusView, TabView, TableView, ToastView, Tone, ViewNode,
};
