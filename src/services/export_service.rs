use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::{Columns, DatasetSummary};
use crate::utils::GenError;

pub const TRANSACTIONS_STEM: &str = "transactions_";
pub const AGENTS_STEM: &str = "Agents";
pub const CLIENTS_STEM: &str = "Clients";

const JSON_INDENT: &[u8] = b"    ";

/// Render records as CSV with a header row taken from the serde field names.
/// An empty slice still gets the header row.
pub fn to_csv<T: Serialize + Columns>(records: &[T]) -> Result<Vec<u8>, GenError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if records.is_empty() {
        writer.write_record(T::COLUMNS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| GenError::Io(e.into_error()))
}

/// Render records as a JSON array indented with four spaces
pub fn to_json<T: Serialize>(records: &[T]) -> Result<Vec<u8>, GenError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write `<dir>/<stem>.csv` and `<dir>/<stem>.json`, creating `dir` if needed
pub async fn write_dataset<T: Serialize + Columns>(
    dir: &Path,
    stem: &str,
    records: &[T],
) -> Result<DatasetSummary, GenError> {
    tokio::fs::create_dir_all(dir).await?;

    let csv_path = dir.join(format!("{}.csv", stem));
    let csv_bytes = to_csv(records)?;
    tokio::fs::write(&csv_path, &csv_bytes).await?;
    debug!("Wrote {} ({} bytes)", csv_path.display(), csv_bytes.len());

    let json_path = dir.join(format!("{}.json", stem));
    let json_bytes = to_json(records)?;
    tokio::fs::write(&json_path, &json_bytes).await?;
    debug!("Wrote {} ({} bytes)", json_path.display(), json_bytes.len());

    info!("Saved {} {} records", records.len(), stem);

    Ok(DatasetSummary {
        name: stem.to_string(),
        rows: records.len(),
        csv_path,
        json_path,
    })
}
