// ============================================================
// Layer 0 — HTTP Errors
// ============================================================
// Maps failures onto the two status codes the service uses:
//
//   400 → the request does not carry a usable `csvfile` upload
//   500 → anything that went wrong while processing it
//
// Every error body is {"error": "<message>"}. A 500 carries the
// whole context chain on one line and is logged at error level.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file part")]
    NoFilePart,

    #[error("No selected file")]
    NoSelectedFile,

    #[error("Malformed upload: {0}")]
    MalformedUpload(String),

    #[error("{0:#}")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoFilePart
            | ApiError::NoSelectedFile
            | ApiError::MalformedUpload(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(err) => tracing::error!("Request failed: {err:?}"),
            other                   => tracing::warn!("Rejected upload: {other}"),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
