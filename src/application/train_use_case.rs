// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates one training request:
//
//   Step 1: Parse the upload into a Table      (Layer 4 - data)
//   Step 2: Project onto the expected columns  (Layer 3 - domain)
//   Step 3: Convert "H:MM" → minutes           (Layer 4 - data)
//   Step 4: Build features [Value, Time] and
//           target Value                       (Layer 4 - data)
//   Step 5: Fit the random forest              (Layer 5 - ml)
//   Step 6: Persist, overwriting the old model (Layer 6 - infra)
//   Step 7: Report the persisted size
//
// Value is both a feature and the target. The service has
// always trained this way; it is kept as-is.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::data::preprocessor::Preprocessor;
use crate::domain::{
    report::TrainReport,
    schema::{ExpectedFeatures, FeatureSchema},
    traits::{ModelRepository, TableSource},
};
use crate::ml::model::{ForestConfig, RegressionModel};
use crate::ml::trainer::fit_forest;

pub struct TrainUseCase<R> {
    features:   Arc<ExpectedFeatures>,
    forest:     ForestConfig,
    repository: R,
}

impl<R: ModelRepository<RegressionModel>> TrainUseCase<R> {
    pub fn new(features: Arc<ExpectedFeatures>, forest: ForestConfig, repository: R) -> Self {
        Self { features, forest, repository }
    }

    /// Run the full training pipeline on one CSV source.
    pub fn execute(&self, source: &dyn TableSource) -> Result<TrainReport> {
        // ── Step 1–2: Load and project ────────────────────────────────────────
        let raw = source.load_table()?;
        let mut table = raw.project(self.features.names())?;
        tracing::info!("Training upload: {} rows", table.row_count());

        // ── Step 3: Time column → minutes since midnight ──────────────────────
        let preprocessor = Preprocessor::new(FeatureSchema::service());
        preprocessor.convert_time_column(&mut table)?;

        // ── Step 4: Feature matrix and target ─────────────────────────────────
        let features = preprocessor.feature_rows(&table)?;
        let target   = preprocessor.target(&table)?;

        // ── Step 5: Fit ───────────────────────────────────────────────────────
        let model = fit_forest(
            &self.forest,
            &preprocessor.schema().feature_columns,
            &features,
            &target,
        )?;

        // ── Step 6–7: Persist and report ──────────────────────────────────────
        let size = self
            .repository
            .save(&model)
            .context("Cannot persist trained model")?;

        Ok(TrainReport::from_model_size(size))
    }
}
