// ============================================================
// Layer 0 — Upload Extraction
// ============================================================
// Pulls the `csvfile` part out of a multipart/form-data body.
//
//   not multipart at all            → 400 "No file part"
//   no `csvfile` part with filename → 400 "No file part"
//   `csvfile` with filename ""      → 400 "No selected file"
//   broken / oversized stream       → 400 "Malformed upload: ..."
//
// Parts without a filename are plain form fields, not files,
// and are skipped.

use axum::extract::{multipart::MultipartRejection, Multipart};

use crate::api::error::ApiError;

/// Name of the multipart field carrying the CSV file.
pub const FILE_FIELD: &str = "csvfile";

/// One uploaded CSV file.
#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub bytes:    Vec<u8>,
}

impl Upload {
    pub async fn from_multipart(
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Self, ApiError> {
        let mut multipart = multipart.map_err(|rejection| {
            tracing::debug!("Not a multipart request: {rejection}");
            ApiError::NoFilePart
        })?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::MalformedUpload(e.body_text()))?
        {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }
            let Some(filename) = field.file_name().map(str::to_string) else {
                continue;
            };
            if filename.is_empty() {
                return Err(ApiError::NoSelectedFile);
            }

            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::MalformedUpload(e.body_text()))?;

            tracing::info!("Received '{}' ({} bytes)", filename, bytes.len());
            return Ok(Self { filename, bytes: bytes.to_vec() });
        }

        Err(ApiError::NoFilePart)
    }
}
