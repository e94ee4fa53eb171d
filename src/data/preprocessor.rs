// ============================================================
// Layer 4 — Preprocessor
// ============================================================
// Turns a projected Table into model input, driven by a
// FeatureSchema:
//
//   1. convert_time_column → "H:MM" cells become minute counts
//   2. feature_rows        → one Vec<f64> per row, schema order
//   3. target              → the target column as Vec<f64>
//
// Every cell read as a number must parse as a finite f64.
// The first bad cell fails the whole call; the error names the
// column, the 1-based row and the offending text.
//
// Reference: Rust Book §13 (Iterators)

use anyhow::{anyhow, bail, Result};

use crate::domain::schema::FeatureSchema;
use crate::domain::table::Table;
use crate::domain::time_of_day::minutes_since_midnight;

pub struct Preprocessor {
    schema: FeatureSchema,
}

impl Preprocessor {
    pub fn new(schema: FeatureSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Replace the time column's "H:MM" strings with minutes since midnight.
    pub fn convert_time_column(&self, table: &mut Table) -> Result<()> {
        let column = &self.schema.time_column;

        let minutes = table
            .column(column)?
            .into_iter()
            .enumerate()
            .map(|(idx, cell)| {
                minutes_since_midnight(cell)
                    .map(|m| m.to_string())
                    .map_err(|e| anyhow!("column '{}', row {}: {}", column, idx + 1, e))
            })
            .collect::<Result<Vec<String>>>()?;

        table.replace_column(column, minutes)
    }

    /// Build the feature matrix: rows × schema.feature_columns.
    pub fn feature_rows(&self, table: &Table) -> Result<Vec<Vec<f64>>> {
        let columns = self
            .schema
            .feature_columns
            .iter()
            .map(|name| numeric_column(table, name))
            .collect::<Result<Vec<Vec<f64>>>>()?;

        // Transpose column-major → row-major
        Ok((0..table.row_count())
            .map(|row| columns.iter().map(|col| col[row]).collect())
            .collect())
    }

    /// The target vector, one entry per row.
    pub fn target(&self, table: &Table) -> Result<Vec<f64>> {
        numeric_column(table, &self.schema.target_column)
    }
}

fn numeric_column(table: &Table, name: &str) -> Result<Vec<f64>> {
    table
        .column(name)?
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| parse_number(cell).map_err(|e| {
            anyhow!("column '{}', row {}: {}", name, idx + 1, e)
        }))
        .collect()
}

fn parse_number(cell: &str) -> Result<f64> {
    let value: f64 = cell
        .trim()
        .parse()
        .map_err(|_| anyhow!("'{}' is not a number", cell))?;
    if !value.is_finite() {
        bail!("'{}' is not a finite number", cell);
    }
    Ok(value)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[[&str; 2]]) -> Table {
        Table::new(
            vec!["Time".to_string(), "Value".to_string()],
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_converts_time_in_place() {
        let p = Preprocessor::new(FeatureSchema::service());
        let mut t = table(&[["7:45", "1"], ["0:00", "2"]]);
        p.convert_time_column(&mut t).unwrap();
        assert_eq!(t.column("Time").unwrap(), vec!["465", "0"]);
    }

    #[test]
    fn test_malformed_time_names_row() {
        let p = Preprocessor::new(FeatureSchema::service());
        let mut t = table(&[["7:45", "1"], ["abc", "2"]]);
        let err = p.convert_time_column(&mut t).unwrap_err().to_string();
        assert!(err.contains("row 2"));
        assert!(err.contains("abc"));
    }

    #[test]
    fn test_feature_rows_follow_schema_order() {
        let p = Preprocessor::new(FeatureSchema::service());
        let mut t = table(&[["7:45", "10.5"], ["8:00", "11"]]);
        p.convert_time_column(&mut t).unwrap();

        // Service schema feeds [Value, Time]
        let rows = p.feature_rows(&t).unwrap();
        assert_eq!(rows, vec![vec![10.5, 465.0], vec![11.0, 480.0]]);
        assert_eq!(p.target(&t).unwrap(), vec![10.5, 11.0]);
    }

    #[test]
    fn test_rejects_non_numeric_and_nan() {
        let p = Preprocessor::new(FeatureSchema::service());
        let mut t = table(&[["7:45", "wet"]]);
        p.convert_time_column(&mut t).unwrap();
        assert!(p.feature_rows(&t).is_err());

        let mut t = table(&[["7:45", "NaN"]]);
        p.convert_time_column(&mut t).unwrap();
        assert!(p.target(&t).is_err());

        let mut t = table(&[["7:45", ""]]);
        p.convert_time_column(&mut t).unwrap();
        assert!(p.target(&t).is_err());
    }

    #[test]
    fn test_empty_table_gives_empty_matrix() {
        let p = Preprocessor::new(FeatureSchema::service());
        let mut t = table(&[]);
        p.convert_time_column(&mut t).unwrap();
        assert!(p.feature_rows(&t).unwrap().is_empty());
    }
}
