// ============================================================
// Layer 3 — Table Domain Type
// ============================================================
// An in-memory table: one header row plus data rows of raw
// string cells. Cells stay as strings until the preprocessor
// decides how each column is interpreted.
//
// A Table lives for one request (or one offline run) only.
//
// Reference: Rust Book §8 (Collections)

use anyhow::{bail, Result};

/// Rows × named columns, as parsed from a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names in file order
    headers: Vec<String>,

    /// Data rows; every row has exactly `headers.len()` cells
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, checking that every row matches the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            bail!(
                "row {} has {} cells but the header has {} columns",
                idx + 1,
                row.len(),
                headers.len()
            );
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name. Duplicated headers resolve
    /// to the first occurrence.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Borrow every cell of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self.require(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Keep exactly `columns`, in the given order.
    ///
    /// Fails with every missing name listed, so a caller sees the
    /// whole schema mismatch at once instead of one column at a time.
    pub fn project(&self, columns: &[String]) -> Result<Table> {
        let missing: Vec<&str> = columns
            .iter()
            .filter(|c| self.column_index(c).is_none())
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            bail!(
                "columns not found in upload: {:?} (available: {:?})",
                missing,
                self.headers
            );
        }

        let indices: Vec<usize> = columns
            .iter()
            .filter_map(|c| self.column_index(c))
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Table {
            headers: columns.to_vec(),
            rows,
        })
    }

    /// Overwrite every cell of an existing column.
    pub fn replace_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        let idx = self.require(name)?;
        self.check_height(name, values.len())?;
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[idx] = value;
        }
        Ok(())
    }

    /// Append a new column at the right-hand side.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<String>) -> Result<()> {
        let name = name.into();
        self.check_height(&name, values.len())?;
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        self.headers.push(name);
        Ok(())
    }

    fn require(&self, name: &str) -> Result<usize> {
        match self.column_index(name) {
            Some(idx) => Ok(idx),
            None => bail!("column '{}' not found (available: {:?})", name, self.headers),
        }
    }

    fn check_height(&self, name: &str, len: usize) -> Result<()> {
        if len != self.rows.len() {
            bail!(
                "column '{}' has {} values but the table has {} rows",
                name,
                len,
                self.rows.len()
            );
        }
        Ok(())
    }
}
