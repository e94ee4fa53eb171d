// ============================================================
// Layer 5 — ML Layer (smartcore)
// ============================================================
// All smartcore-specific code lives here; no other layer
// imports smartcore directly.
//
//   model.rs      — ForestConfig and the serialisable
//                   RegressionModel (forest + feature columns)
//
//   trainer.rs    — fit_forest: validates shapes and fits a
//                   RandomForestRegressor
//
//   inferencer.rs — checks a loaded model against the caller's
//                   feature schema and predicts
//
// Reference: smartcore documentation

/// Forest hyperparameters and the fitted model wrapper
pub mod model;

/// One-shot forest fitting
pub mod trainer;

/// Schema-checked prediction
pub mod inferencer;
