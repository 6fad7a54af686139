//! Sheet file access: header-first CSV, read whole, written whole.

use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

use crate::errors::StorageError;

/// Raw contents of the sheet: column names and data rows.
///
/// Every row is padded or cut to the header width, so `rows[i][j]` is the
/// cell under `headers[j]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

/// One data row and its position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based file row; the header is row 1.
    pub line: usize,
    pub cells: Vec<String>,
}

impl Sheet {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }
}

/// Reads the sheet at `path`. Rows whose cells are all blank are skipped.
pub fn read_sheet(path: &Path) -> Result<Sheet, StorageError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let width = headers.len();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        cells.resize(width, String::new());
        rows.push(SheetRow {
            line: index + 2,
            cells,
        });
    }

    debug!("Read {} rows from sheet {}", rows.len(), path.display());
    Ok(Sheet { headers, rows })
}

/// Replaces the file at `path` with `headers` followed by `rows`.
///
/// Writes to a sibling temporary file first and renames it over the target,
/// so readers never observe a half-written sheet.
pub fn write_sheet(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<(), StorageError> {
    let tmp_path = path.with_extension("csv.tmp");
    let written = write_records(&tmp_path, headers, rows)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(StorageError::from));
    if let Err(e) = written {
        warn!("Could not write sheet {}: {}", path.display(), e);
        // The sheet itself is untouched; drop the partial copy
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    debug!("Wrote {} rows to sheet {}", rows.len(), path.display());
    Ok(())
}

fn write_records(
    tmp_path: &Path,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<(), StorageError> {
    let mut writer = WriterBuilder::new().from_path(tmp_path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates an empty sheet with `headers` when nothing exists at `path` yet.
pub fn create_if_missing(path: &Path, headers: &[&str]) -> Result<(), StorageError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_sheet(path, &headers, &[])?;
    info!("Created empty inventory sheet at {}", path.display());
    Ok(())
}
