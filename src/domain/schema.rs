// ============================================================
// Layer 3 — Expected Features & Feature Schemas
// ============================================================
// ExpectedFeatures is the ordered column list read once from
// features.txt. It is both the required upload schema and the
// column order handed to the preprocessor.
//
// FeatureSchema says how a projected table becomes a model
// input: which column holds the "H:MM" string, which columns
// form the feature matrix (in order) and which one is the
// target.
//
// Two schemas exist and they are NOT interchangeable:
//   service  → Time / Value           features [Value, Time]
//   offline  → timestamp / value      features [timestamp, value]
//
// Both use the value column as the target while also feeding
// it in as a feature. That duplication is carried over as-is.

/// Ordered list of column names every upload must contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedFeatures {
    names: Vec<String>,
}

impl ExpectedFeatures {
    /// Parse a newline-delimited list. Lines are trimmed and
    /// blank lines are skipped.
    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// How a table's columns map onto model features and target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    /// Column holding "H:MM" strings; converted to minutes in place
    pub time_column: String,

    /// Columns fed to the model, in this order
    pub feature_columns: Vec<String>,

    /// Column the model learns to predict
    pub target_column: String,
}

impl FeatureSchema {
    /// Schema used by the HTTP endpoints.
    pub fn service() -> Self {
        Self {
            time_column:     "Time".to_string(),
            feature_columns: vec!["Value".to_string(), "Time".to_string()],
            target_column:   "Value".to_string(),
        }
    }

    /// Schema used by the `train-local` command.
    pub fn offline() -> Self {
        Self {
            time_column:     "timestamp".to_string(),
            feature_columns: vec!["timestamp".to_string(), "value".to_string()],
            target_column:   "value".to_string(),
        }
    }

    /// Every column this schema reads, without duplicates.
    pub fn required_columns(&self) -> Vec<&str> {
        let mut cols: Vec<&str> = Vec::new();
        let all = std::iter::once(self.time_column.as_str())
            .chain(self.feature_columns.iter().map(String::as_str))
            .chain(std::iter::once(self.target_column.as_str()));
        for c in all {
            if !cols.contains(&c) {
                cols.push(c);
            }
        }
        cols
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let f = ExpectedFeatures::parse("Time\r\n  Value \n\n");
        assert_eq!(f.names(), &["Time".to_string(), "Value".to_string()]);
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let f = ExpectedFeatures::parse("Value\nTime\n");
        assert_eq!(f.names()[0], "Value");
        assert!(f.contains("Time"));
        assert!(!f.contains("time"));
    }

    #[test]
    fn test_empty_file_gives_empty_list() {
        assert!(ExpectedFeatures::parse("\n \n").is_empty());
    }

    #[test]
    fn test_schemas_are_distinct() {
        let service = FeatureSchema::service();
        let offline = FeatureSchema::offline();
        assert_eq!(service.required_columns(), vec!["Time", "Value"]);
        assert_eq!(offline.required_columns(), vec!["timestamp", "value"]);
        assert_ne!(service, offline);
    }
}
