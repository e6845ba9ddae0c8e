use axum::{Json, http::StatusCode};

use crate::error::ApiErrorBody;

/// Fallback for anything no route or static file matched.
pub async fn not_found() -> (StatusCode, Json<ApiErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorBody {
            error: "Not found".to_string(),
        }),
    )
}
