pub mod action;
pub mod catalog_state;
pub mod connection_state;
pub mod debounce;
pub mod detail_state;
pub mod detail_tab;
pub mod effect;
pub mod effect_runner;
pub mod focused_pane;
pub mod input_mode;
pub mod load_state;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod render_schedule;
pub mod search_state;
pub mod settings;
pub mod state;
pub mod toast_state;
pub mod ui_state;
pub mod view;
