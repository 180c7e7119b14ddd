pub mod app_config;
pub mod cache;

pub use app_config::{AppConfig, ConfigError};
