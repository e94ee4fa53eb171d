// ============================================================
// Layer 5 — Regression Model
// ============================================================
// Wraps smartcore's RandomForestRegressor together with the
// ordered feature column names it was fitted on.
//
// The whole struct is serde-serialisable (smartcore "serde"
// feature), so Layer 6 can persist it as one bincode blob.
//
// ForestConfig defaults follow the usual random-forest
// regressor defaults:
//   n_trees           = 100
//   max_depth         = unlimited
//   min_samples_split = 2
//   min_samples_leaf  = 1
//   features per split = all of them
//   seed              = random unless configured
//
// Reference: smartcore ensemble::random_forest_regressor docs
//            Breiman (2001) Random Forests

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Concrete smartcore forest type used throughout the crate.
pub type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Forest hyperparameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestConfig {
    /// Number of trees in the ensemble
    pub n_trees: usize,

    /// Maximum depth per tree; None grows until leaves are pure
    pub max_depth: Option<u16>,

    /// Minimum samples needed to split an internal node
    pub min_samples_split: usize,

    /// Minimum samples required in a leaf
    pub min_samples_leaf: usize,

    /// Bootstrap seed; None draws a fresh one per fit
    pub seed: Option<u64>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees:           100,
            max_depth:         None,
            min_samples_split: 2,
            min_samples_leaf:  1,
            seed:              None,
        }
    }
}

impl ForestConfig {
    /// Translate into smartcore parameters for a matrix with
    /// `n_features` columns.
    pub fn parameters(&self, n_features: usize) -> RandomForestRegressorParameters {
        let seed = self.seed.unwrap_or_else(rand::random::<u64>);

        let params = RandomForestRegressorParameters::default()
            .with_n_trees(self.n_trees)
            .with_min_samples_split(self.min_samples_split)
            .with_min_samples_leaf(self.min_samples_leaf)
            .with_m(n_features.max(1))
            .with_seed(seed);

        match self.max_depth {
            Some(depth) => params.with_max_depth(depth),
            None        => params,
        }
    }
}

/// A fitted forest plus the feature columns, in order, it expects.
#[derive(Serialize, Deserialize)]
pub struct RegressionModel {
    feature_columns: Vec<String>,
    forest:          Forest,
}

impl RegressionModel {
    pub(crate) fn new(feature_columns: Vec<String>, forest: Forest) -> Self {
        Self { feature_columns, forest }
    }

    /// Column names the model was fitted on, in matrix order.
    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    /// Predict one value per input row.
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        if rows.is_empty() {
            bail!("Cannot predict on an empty dataset");
        }
        check_width(rows, self.feature_columns.len())?;

        let x = to_matrix(rows)?;
        self.forest
            .predict(&x)
            .map_err(|e| anyhow!("Prediction failed: {:?}", e))
    }
}

/// Build a smartcore matrix from row-major data.
pub(crate) fn to_matrix(rows: &[Vec<f64>]) -> Result<DenseMatrix<f64>> {
    DenseMatrix::from_2d_vec(&rows.to_vec())
        .map_err(|e| anyhow!("Cannot build feature matrix: {:?}", e))
}

/// Every row must have exactly `width` features.
pub(crate) fn check_width(rows: &[Vec<f64>], width: usize) -> Result<()> {
    if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        bail!(
            "Row {} has {} features but the model expects {}",
            idx + 1,
            row.len(),
            width
        );
    }
    Ok(())
}
