// ============================================================
// Layer 0 — Request Handlers
// ============================================================
// POST /train and POST /predict.
//
// Each handler extracts the upload, then hands the CSV bytes to
// its use case on the blocking pool: parsing, fitting and
// prediction are CPU-bound and must not stall the runtime.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};

use crate::api::{error::ApiError, upload::Upload, AppState};
use crate::application::{predict_use_case::PredictUseCase, train_use_case::TrainUseCase};
use crate::data::loader::CsvLoader;
use crate::domain::report::{PredictionReport, TrainReport};

/// Fit a new forest on the uploaded rows and overwrite the persisted model.
pub async fn train(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TrainReport>, ApiError> {
    let Upload { filename, bytes } = Upload::from_multipart(multipart).await?;

    let use_case = TrainUseCase::new(
        state.features.clone(),
        state.forest.clone(),
        state.store.clone(),
    );
    let report = tokio::task::spawn_blocking(move || {
        use_case.execute(&CsvLoader::from_bytes(bytes))
    })
    .await
    .map_err(|e| ApiError::Internal(anyhow::anyhow!("Training task failed: {e}")))??;

    tracing::info!("Model trained on '{}': {} bytes", filename, report.model_size_bytes);
    Ok(Json(report))
}

/// Predict one value per uploaded row with the persisted model.
pub async fn predict(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictionReport>, ApiError> {
    let Upload { filename, bytes } = Upload::from_multipart(multipart).await?;

    let use_case = PredictUseCase::new(state.features.clone(), state.store.clone());
    let report = tokio::task::spawn_blocking(move || {
        use_case.execute(&CsvLoader::from_bytes(bytes))
    })
    .await
    .map_err(|e| ApiError::Internal(anyhow::anyhow!("Prediction task failed: {e}")))??;

    tracing::info!("Predicted {} rows from '{}'", report.prediction.len(), filename);
    Ok(Json(report))
}
