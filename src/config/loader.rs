// src/config/loader.rs

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::model::CostConfig;
use crate::errors::{CostMonitorError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// Conventional location of the cost-limit file, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "openclaw-config/cost-limits.json";

/// Read and parse the file as JSON without checking its shape.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        CostMonitorError::schema(
            "$",
            format!("malformed JSON at line {}, column {}: {e}", e.line(), e.column()),
        )
    })
}

/// Load a cost config from disk and validate it field by field.
///
/// Does not check that `path` exists first; callers that want a distinct
/// "not found" outcome should check before calling.
pub fn load_config(path: impl AsRef<Path>) -> Result<CostConfig> {
    load_config_with(&RealFileSystem, path)
}

/// Like [`load_config`], reading through the given filesystem.
pub fn load_config_with(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<CostConfig> {
    let path = path.as_ref();
    let doc = load_from_path(fs, path)?;
    let config = CostConfig::try_from(doc)?;
    debug!(
        path = %path.display(),
        limits = config.limits().len(),
        "loaded cost config"
    );
    Ok(config)
}
