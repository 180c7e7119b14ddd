use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use crate::config::cache::get_cache_dir;

pub const LOG_FILE_NAME: &str = "lakeview.log";

const NOISY_TARGETS: &[(&str, &str)] = &[("hyper", "warn"), ("hyper_util", "warn"), ("reqwest", "warn")];

/// `RUST_LOG` when set, otherwise `level` with HTTP client crates capped at warn.
pub fn build_env_filter(level: &str, rust_log: Option<&str>) -> Result<EnvFilter> {
    let filter_str = match rust_log.filter(|s| !s.trim().is_empty()) {
        Some(directives) => directives.to_string(),
        None => {
            let mut directives = vec![level.to_string()];
            directives.extend(
                NOISY_TARGETS
                    .iter()
                    .map(|(target, lvl)| format!("{target}={lvl}")),
            );
            directives.join(",")
        }
    };

    EnvFilter::try_new(&filter_str)
        .map_err(|e| eyre!("Invalid tracing filter '{filter_str}': {e}"))
}

/// Installs a file-backed fmt subscriber. The terminal belongs to the TUI, so nothing
/// is written to stdout or stderr.
pub fn init_logging(level: &str) -> Result<PathBuf> {
    let path = get_cache_dir()?.join(LOG_FILE_NAME);
    let rust_log = std::env::var("RUST_LOG").ok();
    init_logging_at(&path, level, rust_log.as_deref())?;
    Ok(path)
}

pub fn init_logging_at(path: &Path, level: &str, rust_log: Option<&str>) -> Result<()> {
    let filter = build_env_filter(level, rust_log)?;
    let log_file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(log_file))
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre!("Failed to install tracing subscriber: {e}"))
}
