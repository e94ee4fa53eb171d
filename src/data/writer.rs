// ============================================================
// Layer 4 — CSV Writer
// ============================================================
// Writes a Table (header + rows) to a CSV file. Used by the
// offline command to save the input rows with their predictions.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::table::Table;

pub struct CsvWriter;

impl CsvWriter {
    /// Write `table` to `path`, replacing any existing file.
    pub fn write(table: &Table, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;

        writer.write_record(table.headers())?;
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer
            .flush()
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Wrote {} rows to '{}'", table.row_count(), path.display());
        Ok(())
    }
}
