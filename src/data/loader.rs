// ============================================================
// Layer 4 — CSV Loader
// ============================================================
// Parses CSV into a Table using the csv crate.
//
// Sources:
//   - Bytes → the body of an uploaded `csvfile` part
//   - Path  → a local file for the offline command
//
// The first record is the header. Every data record must have
// the same number of fields as the header; a ragged file is an
// error, not silently padded. Cells are kept as raw strings.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{io::Read, path::PathBuf};

use crate::domain::table::Table;
use crate::domain::traits::TableSource;

enum CsvSource {
    Bytes(Vec<u8>),
    Path(PathBuf),
}

/// Loads a single CSV document into a Table.
pub struct CsvLoader {
    source: CsvSource,
}

impl CsvLoader {
    /// Parse an in-memory upload
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { source: CsvSource::Bytes(bytes.into()) }
    }

    /// Parse a file on disk
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { source: CsvSource::Path(path.into()) }
    }
}

impl TableSource for CsvLoader {
    fn load_table(&self) -> Result<Table> {
        match &self.source {
            CsvSource::Bytes(bytes) => {
                read_table(bytes.as_slice()).context("Cannot parse uploaded CSV")
            }
            CsvSource::Path(path) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Cannot open '{}'", path.display()))?;
                read_table(file).with_context(|| format!("Cannot parse '{}'", path.display()))
            }
        }
    }
}

/// Read every record from a CSV stream.
fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("Cannot read CSV header")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("Cannot read CSV row {}", idx + 1))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!("Parsed CSV: {} columns, {} rows", headers.len(), rows.len());
    Table::new(headers, rows)
}
