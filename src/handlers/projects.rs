use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::debug;

use crate::db::Project;
use crate::error::PortfolioError;
use crate::middleware::JsonBody;
use crate::router::PortfolioState;
use crate::types::NewProject;

const MISSING_FIELDS: &str = "Title and description are required";

/// GET /api/projects
pub async fn list_projects(
    State(state): State<PortfolioState>,
) -> Result<Json<Vec<Project>>, PortfolioError> {
    Ok(Json(state.store.list_projects().await?))
}

/// POST /api/projects
pub async fn add_project(
    State(state): State<PortfolioState>,
    JsonBody(body): JsonBody<NewProject>,
) -> Result<(StatusCode, Json<Value>), PortfolioError> {
    state.store.insert_project(&body).await.map_err(|e| match e {
        PortfolioError::Validation { field } => {
            debug!(field, "project rejected");
            PortfolioError::BadRequest(MISSING_FIELDS.to_string())
        }
        other => other,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Project added successfully" })),
    ))
}
