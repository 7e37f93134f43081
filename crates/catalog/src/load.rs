//! Catalog loaders for CSV and JSON exports of the GP table.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::GpRecord;

/// Errors surfaced while reading a catalog export.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported catalog format for {}: expected .csv or .json", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Load GP rows from a `.csv` (header row required) or `.json` (array of rows) file.
pub fn load_gp_records<P: AsRef<Path>>(path: P) -> Result<Vec<GpRecord>, CatalogError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let records = match extension.as_deref() {
        Some("csv") => read_csv(path)?,
        Some("json") => read_json(path)?,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };
    log::info!("Loaded {} catalog rows from {}", records.len(), path.display());
    Ok(records)
}

fn read_csv(path: &Path) -> Result<Vec<GpRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    // CSV cells are type-inferred, so `00005` would otherwise come back as `5`.
    let id_column = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("NORAD_CAT_ID"));
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record: GpRecord = row.deserialize(Some(&headers))?;
        if let Some(raw) = id_column.and_then(|idx| row.get(idx)) {
            record.norad_cat_id = raw.to_string();
        }
        records.push(record);
    }
    Ok(records)
}

fn read_json(path: &Path) -> Result<Vec<GpRecord>, CatalogError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
