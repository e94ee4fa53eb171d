// ============================================================
// Layer 5 — Trainer
// ============================================================
// Fits a random forest on (features, target) in one call.
// There is no epoch loop: smartcore grows every tree on its
// own bootstrap sample and returns the finished ensemble.

use anyhow::{anyhow, bail, Result};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use std::time::Instant;

use crate::ml::model::{check_width, to_matrix, ForestConfig, RegressionModel};

/// Fit a forest. `feature_columns` names the columns of `features`
/// in order and is stored with the model.
pub fn fit_forest(
    cfg:             &ForestConfig,
    feature_columns: &[String],
    features:        &[Vec<f64>],
    target:          &[f64],
) -> Result<RegressionModel> {
    if features.is_empty() {
        bail!("Cannot fit a model on an empty dataset");
    }
    if features.len() != target.len() {
        bail!(
            "Feature rows ({}) and target values ({}) differ in length",
            features.len(),
            target.len()
        );
    }
    check_width(features, feature_columns.len())?;

    tracing::info!(
        "Fitting random forest: {} rows, features {:?}, {} trees",
        features.len(),
        feature_columns,
        cfg.n_trees
    );
    let started = Instant::now();

    let x = to_matrix(features)?;
    let y = target.to_vec();
    let forest = RandomForestRegressor::fit(&x, &y, cfg.parameters(feature_columns.len()))
        .map_err(|e| anyhow!("Training failed: {:?}", e))?;

    tracing::info!("Forest fitted in {:.2?}", started.elapsed());
    Ok(RegressionModel::new(feature_columns.to_vec(), forest))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ForestConfig {
        ForestConfig {
            n_trees: 10,
            seed:    Some(7),
            ..ForestConfig::default()
        }
    }

    fn columns() -> Vec<String> {
        vec!["Value".to_string(), "Time".to_string()]
    }

    #[test]
    fn test_fit_and_predict_every_row() {
        let features: Vec<Vec<f64>> = (0..20)
            .map(|i| vec![10.0 + i as f64, 400.0 + 5.0 * i as f64])
            .collect();
        let target: Vec<f64> = features.iter().map(|r| r[0]).collect();

        let model = fit_forest(&small_config(), &columns(), &features, &target).unwrap();
        let preds = model.predict(&features).unwrap();

        assert_eq!(preds.len(), features.len());
        assert!(preds.iter().all(|p| (10.0..=29.0).contains(p)));
        assert_eq!(model.feature_columns(), &columns()[..]);
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        assert!(fit_forest(&small_config(), &columns(), &[], &[]).is_err());
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let features = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert!(fit_forest(&small_config(), &columns(), &features, &[1.0]).is_err());
    }

    #[test]
    fn test_predict_rejects_wrong_width() {
        let features = vec![vec![1.0, 60.0], vec![2.0, 120.0], vec![3.0, 180.0]];
        let model = fit_forest(&small_config(), &columns(), &features, &[1.0, 2.0, 3.0]).unwrap();
        assert!(model.predict(&[vec![1.0]]).is_err());
        assert!(model.predict(&[]).is_err());
    }
}
