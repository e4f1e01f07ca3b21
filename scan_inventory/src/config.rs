//! Application paths and window settings.
//!
//! There is no config file. The inventory lives in the platform data
//! directory unless a caller (Android, tests) hands in an explicit location.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// File name of the persisted inventory
pub const DATA_FILE_NAME: &str = "scanData.json";

const APP_DIR: &str = "scan_inventory";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the inventory JSON is loaded from and saved to
    pub data_file: PathBuf,
    /// Initial window size on desktop, in points
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_data_file(default_data_file())
    }
}

impl AppConfig {
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            window_size: [480.0, 720.0],
        }
    }

    /// Keeps the inventory file inside `dir` (the activity's internal storage on Android)
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_data_file(dir.join(DATA_FILE_NAME))
    }
}

/// Returns the default inventory path: <data dir>/scan_inventory/scanData.json
pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DATA_FILE_NAME)
}

/// Suggested file name for an export made today
pub fn export_file_name() -> String {
    export_file_name_for(chrono::Local::now().date_naive())
}

/// Suggested file name for an export made on `date`, e.g. `scanData-2025-09-07.json`
pub fn export_file_name_for(date: NaiveDate) -> String {
    format!("scanData-{}.json", date.format("%Y-%m-%d"))
}
