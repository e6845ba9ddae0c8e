use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::error::PortfolioError;
use crate::router::PortfolioState;
use crate::service::uploads;

const FILE_FIELD: &str = "file";

/// POST /api/upload: stores the multipart `file` part under the upload dir.
pub async fn upload_file(
    State(state): State<PortfolioState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, PortfolioError> {
    let mut multipart =
        multipart.map_err(|_| PortfolioError::BadRequest("No file provided".to_string()))?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let raw_name = field.file_name().unwrap_or_default().to_string();
        if raw_name.is_empty() {
            return Err(PortfolioError::BadRequest("No file selected".to_string()));
        }
        let filename = uploads::secure_filename(&raw_name);
        if filename.is_empty() {
            return Err(PortfolioError::BadRequest("Invalid filename".to_string()));
        }

        let bytes = field.bytes().await.map_err(multipart_error)?;
        uploads::save(&state.upload_dir, &filename, &bytes).await?;

        return Ok(Json(json!({
            "message": "File uploaded successfully",
            "url": uploads::public_url(&filename),
            "filename": filename,
        })));
    }

    Err(PortfolioError::BadRequest("No file provided".to_string()))
}

fn multipart_error(e: MultipartError) -> PortfolioError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        PortfolioError::PayloadTooLarge
    } else {
        PortfolioError::BadRequest(e.body_text())
    }
}
