use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PortfolioError {
    #[error("{field} is required")]
    Validation { field: &'static str },

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("{0}")]
    BadRequest(String),

    #[error("File too large")]
    PayloadTooLarge,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),
}

impl PortfolioError {
    pub fn status(&self) -> StatusCode {
        match self {
            PortfolioError::Validation { .. } | PortfolioError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            PortfolioError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            PortfolioError::Database(_) | PortfolioError::Io(_) | PortfolioError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        match &self {
            PortfolioError::Validation { field } => {
                tracing::debug!(field, "rejected request with missing field");
            }
            PortfolioError::BadRequest(reason) => {
                tracing::debug!(%reason, "rejected bad request");
            }
            PortfolioError::PayloadTooLarge => {
                tracing::warn!("rejected oversized upload");
            }
            PortfolioError::Database(e) => tracing::error!(error = %e, "database error"),
            PortfolioError::Io(e) => tracing::error!(error = %e, "filesystem error"),
            PortfolioError::Config(e) => tracing::error!(error = %e, "config error"),
        }
        (
            status,
            Json(ApiErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Error payload shared by every endpoint: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_names_field() {
        let resp = PortfolioError::Validation { field: "subject" }.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "subject is required");
    }

    #[tokio::test]
    async fn database_error_is_500_with_message() {
        let resp = PortfolioError::Database(SqlxError::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(value["error"].as_str().unwrap().starts_with("Database error"));
    }

    #[test]
    fn oversized_upload_is_413() {
        assert_eq!(
            PortfolioError::PayloadTooLarge.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }
}
