//! Export result models

use std::path::PathBuf;

/// Column names of a row type, in serialization order. Used for the CSV
/// header when there are no rows to derive it from.
pub trait Columns {
    const COLUMNS: &'static [&'static str];
}

/// What was written for one dataset
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub name: String,
    pub rows: usize,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
}
