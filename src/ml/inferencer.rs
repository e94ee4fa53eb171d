// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Binds a loaded model to the schema of the caller before any
// prediction is made. A model fitted on a different feature
// list (for example one produced by `train-local`, which uses
// timestamp/value) is refused instead of being fed columns it
// was never trained on.

use anyhow::{bail, Result};

use crate::domain::schema::FeatureSchema;
use crate::ml::model::RegressionModel;

pub struct Inferencer {
    model: RegressionModel,
}

impl Inferencer {
    /// Wrap `model`, checking it was fitted on `schema`'s feature columns.
    pub fn for_schema(model: RegressionModel, schema: &FeatureSchema) -> Result<Self> {
        if model.feature_columns() != schema.feature_columns.as_slice() {
            bail!(
                "Persisted model was fitted on columns {:?}, expected {:?}",
                model.feature_columns(),
                schema.feature_columns
            );
        }
        Ok(Self { model })
    }

    /// One prediction per row, in row order.
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        let predictions = self.model.predict(rows)?;
        tracing::debug!("Predicted {} rows", predictions.len());
        Ok(predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::ForestConfig;
    use crate::ml::trainer::fit_forest;

    fn fitted(columns: &[String]) -> RegressionModel {
        let features = vec![vec![1.0, 60.0], vec![2.0, 120.0], vec![3.0, 180.0]];
        let cfg = ForestConfig { n_trees: 5, seed: Some(1), ..ForestConfig::default() };
        fit_forest(&cfg, columns, &features, &[1.0, 2.0, 3.0]).unwrap()
    }

    #[test]
    fn test_accepts_matching_schema() {
        let schema = FeatureSchema::service();
        let inf = Inferencer::for_schema(fitted(&schema.feature_columns), &schema).unwrap();
        assert_eq!(inf.predict(&[vec![2.0, 120.0]]).unwrap().len(), 1);
    }

    #[test]
    fn test_refuses_offline_model() {
        let offline = FeatureSchema::offline();
        let model = fitted(&offline.feature_columns);
        assert!(Inferencer::for_schema(model, &FeatureSchema::service()).is_err());
    }
}
