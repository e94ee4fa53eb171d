// ============================================================
// Layer 2 — OfflineUseCase
// ============================================================
// Train, save and predict against a local CSV file without the
// HTTP service. Used for experimenting with exported sensor
// data.
//
//   Step 1: Read the CSV                       (Layer 4 - data)
//   Step 2: Convert timestamp "H:MM" → minutes (Layer 4 - data)
//   Step 3: Fit on [timestamp, value] → value  (Layer 5 - ml)
//   Step 4: Save the model                     (Layer 6 - infra)
//   Step 5: Predict on the training rows       (Layer 5 - ml)
//   Step 6: Append "Predictions" and write CSV (Layer 4 - data)
//
// This command uses the timestamp/value schema, not the
// service's Time/Value one, and keeps every input column.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::{loader::CsvLoader, preprocessor::Preprocessor, writer::CsvWriter};
use crate::domain::{
    schema::FeatureSchema,
    traits::{ModelRepository, TableSource},
};
use crate::infra::model_store::ModelStore;
use crate::ml::model::ForestConfig;
use crate::ml::trainer::fit_forest;

pub const PREDICTIONS_COLUMN: &str = "Predictions";

#[derive(Debug, Clone)]
pub struct OfflineConfig {
    pub input_csv:  PathBuf,
    pub model_path: PathBuf,
    pub output_csv: PathBuf,
    pub forest:     ForestConfig,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            input_csv:  PathBuf::from("moisture_data (7).csv"),
            model_path: PathBuf::from("random_forest_regressor.bin"),
            output_csv: PathBuf::from("Predictions.csv"),
            forest:     ForestConfig::default(),
        }
    }
}

/// What one offline run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct OfflineSummary {
    pub rows:             usize,
    pub model_size_bytes: u64,
}

pub struct OfflineUseCase {
    config: OfflineConfig,
}

impl OfflineUseCase {
    pub fn new(config: OfflineConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<OfflineSummary> {
        let cfg = &self.config;

        // ── Step 1: Read the whole file ───────────────────────────────────────
        let mut table = CsvLoader::from_path(&cfg.input_csv).load_table()?;
        tracing::info!("Columns in the data: {:?}", table.headers());

        // ── Step 2: timestamp → minutes ───────────────────────────────────────
        let preprocessor = Preprocessor::new(FeatureSchema::offline());
        preprocessor.convert_time_column(&mut table)?;

        // ── Step 3: Fit ───────────────────────────────────────────────────────
        let features = preprocessor.feature_rows(&table)?;
        let target   = preprocessor.target(&table)?;
        let model    = fit_forest(
            &cfg.forest,
            &preprocessor.schema().feature_columns,
            &features,
            &target,
        )?;

        // ── Step 4: Save ──────────────────────────────────────────────────────
        let store = ModelStore::new(&cfg.model_path);
        let size  = store.save(&model)?;
        tracing::info!("Model saved as '{}'", cfg.model_path.display());

        // ── Step 5–6: Predict and write alongside the inputs ──────────────────
        let predictions = model.predict(&features)?;
        table.push_column(
            PREDICTIONS_COLUMN,
            predictions.iter().map(f64::to_string).collect(),
        )?;
        CsvWriter::write(&table, &cfg.output_csv)
            .with_context(|| "Cannot save predictions")?;
        tracing::info!("Predictions saved to '{}'", cfg.output_csv.display());

        Ok(OfflineSummary {
            rows:             table.row_count(),
            model_size_bytes: size,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_writes_predictions_next_to_inputs() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("moisture.csv");
        fs::write(
            &input,
            "sensor,timestamp,value\nA,7:45,30.5\nA,8:00,31.0\nB,8:15,29.75\nB,8:30,30.0\n",
        )
        .unwrap();

        let cfg = OfflineConfig {
            input_csv:  input,
            model_path: dir.path().join("model.bin"),
            output_csv: dir.path().join("Predictions.csv"),
            forest:     ForestConfig { n_trees: 10, seed: Some(9), ..ForestConfig::default() },
        };
        let summary = OfflineUseCase::new(cfg.clone()).execute().unwrap();
        assert_eq!(summary.rows, 4);
        assert!(summary.model_size_bytes > 0);
        assert!(cfg.model_path.exists());

        let out = CsvLoader::from_path(&cfg.output_csv).load_table().unwrap();
        assert_eq!(
            out.headers(),
            &["sensor", "timestamp", "value", PREDICTIONS_COLUMN].map(String::from)
        );
        assert_eq!(out.column("timestamp").unwrap(), vec!["465", "480", "495", "510"]);
        assert_eq!(out.row_count(), 4);
    }

    #[test]
    fn test_service_schema_file_is_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("service.csv");
        fs::write(&input, "Time,Value\n7:45,1.0\n").unwrap();

        let cfg = OfflineConfig {
            input_csv:  input,
            model_path: dir.path().join("model.bin"),
            output_csv: dir.path().join("out.csv"),
            ..OfflineConfig::default()
        };
        assert!(OfflineUseCase::new(cfg).execute().is_err());
    }
}
