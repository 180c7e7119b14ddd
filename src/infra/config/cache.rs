use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::{Result, eyre};

/// `<cache_dir>/lakeview`, created on first use. Holds the log file.
pub fn get_cache_dir() -> Result<PathBuf> {
    let cache_base = dirs::cache_dir().ok_or_else(|| eyre!("Could not find cache directory"))?;
    let cache_dir = cache_base.join("lakeview");

    if !cache_dir.exists() {
        fs::create_dir_all(&cache_dir)?;
    }

    Ok(cache_dir)
}
