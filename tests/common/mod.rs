#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use cost_monitor::config::loader::DEFAULT_CONFIG_PATH;
use cost_monitor::fs::RealFileSystem;
use cost_monitor::monitor::{execute, CostMonitor};
use cost_monitor::source::CostSource;
use tempfile::TempDir;

pub use cost_monitor_test_utils::init_tracing;

/// Write `contents` to `<dir>/openclaw-config/cost-limits.json` and return
/// that path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(DEFAULT_CONFIG_PATH);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

/// Fresh working directory with a config file in the conventional place.
pub fn project_with_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), contents);
    (dir, path)
}

/// Run the monitor against `config_path`, returning (exit status, stdout).
pub fn run_monitor(config_path: &Path, source: &dyn CostSource) -> (u8, String) {
    let fs = RealFileSystem;
    let monitor = CostMonitor::new(&fs, source, config_path);
    let mut out = Vec::new();
    let code = execute(&monitor, &mut out, false);
    (code, String::from_utf8(out).unwrap())
}
