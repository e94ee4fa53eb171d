// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Orchestrates one prediction request:
//
//   Step 1: Parse the upload and project it    (Layer 4 / 3)
//   Step 2: Load the persisted model           (Layer 6 - infra)
//   Step 3: Convert "H:MM" → minutes           (Layer 4 - data)
//   Step 4: Build features [Value, Time]       (Layer 4 - data)
//   Step 5: Predict, one value per row         (Layer 5 - ml)
//
// The model is loaded before the time column is converted, so
// an upload with bad times against a missing model reports the
// missing model.

use anyhow::Result;
use std::sync::Arc;

use crate::data::preprocessor::Preprocessor;
use crate::domain::{
    report::PredictionReport,
    schema::{ExpectedFeatures, FeatureSchema},
    traits::{ModelRepository, TableSource},
};
use crate::ml::inferencer::Inferencer;
use crate::ml::model::RegressionModel;

pub struct PredictUseCase<R> {
    features:   Arc<ExpectedFeatures>,
    repository: R,
}

impl<R: ModelRepository<RegressionModel>> PredictUseCase<R> {
    pub fn new(features: Arc<ExpectedFeatures>, repository: R) -> Self {
        Self { features, repository }
    }

    pub fn execute(&self, source: &dyn TableSource) -> Result<PredictionReport> {
        let schema = FeatureSchema::service();

        // ── Step 1: Load and project ──────────────────────────────────────────
        let mut table = source.load_table()?.project(self.features.names())?;
        tracing::info!("Prediction upload: {} rows", table.row_count());

        // ── Step 2: Load whatever model is currently persisted ────────────────
        let inferencer = Inferencer::for_schema(self.repository.load()?, &schema)?;

        // ── Step 3–4: Preprocess ──────────────────────────────────────────────
        let preprocessor = Preprocessor::new(schema);
        preprocessor.convert_time_column(&mut table)?;
        let rows = preprocessor.feature_rows(&table)?;

        // ── Step 5: Predict ───────────────────────────────────────────────────
        let prediction = inferencer.predict(&rows)?;
        Ok(PredictionReport { prediction })
    }
}
