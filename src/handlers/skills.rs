use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::debug;

use crate::db::Skill;
use crate::error::PortfolioError;
use crate::middleware::JsonBody;
use crate::router::PortfolioState;
use crate::types::NewSkill;

const MISSING_FIELDS: &str = "Name, category, and proficiency are required";

/// GET /api/skills
pub async fn list_skills(
    State(state): State<PortfolioState>,
) -> Result<Json<Vec<Skill>>, PortfolioError> {
    Ok(Json(state.store.list_skills().await?))
}

/// POST /api/skills
pub async fn add_skill(
    State(state): State<PortfolioState>,
    JsonBody(body): JsonBody<NewSkill>,
) -> Result<(StatusCode, Json<Value>), PortfolioError> {
    state.store.insert_skill(&body).await.map_err(|e| match e {
        PortfolioError::Validation { field } => {
            debug!(field, "skill rejected");
            PortfolioError::BadRequest(MISSING_FIELDS.to_string())
        }
        other => other,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Skill added successfully" })),
    ))
}
