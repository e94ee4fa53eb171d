// ============================================================
// Layer 3 — Response Reports
// ============================================================
// The JSON bodies returned on success. Field names are part of
// the HTTP contract and must not change.

use serde::Serialize;

pub const TRAIN_SUCCESS_MESSAGE: &str = "Model trained successfully";

/// Returned by `POST /train`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainReport {
    pub message:          String,
    pub model_size_bytes: u64,
    pub model_size_kb:    f64,
    pub model_size_mb:    f64,
}

impl TrainReport {
    /// Build the report from the persisted model's size on disk.
    /// kb = bytes / 1024, mb = kb / 1024
    pub fn from_model_size(bytes: u64) -> Self {
        let kb = bytes as f64 / 1024.0;
        Self {
            message:          TRAIN_SUCCESS_MESSAGE.to_string(),
            model_size_bytes: bytes,
            model_size_kb:    kb,
            model_size_mb:    kb / 1024.0,
        }
    }
}

/// Returned by `POST /predict`: one value per input row, in row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub prediction: Vec<f64>,
}
