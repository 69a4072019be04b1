pub mod races;
pub mod render;
pub mod summary;

use std::path::PathBuf;

use anyhow::Result;
use precinctmap::Config;

/// Configuration from `--config`, or the defaults.
pub(crate) fn load_config(path: &Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::from_json_file(path),
        None => Ok(Config::default()),
    }
}
