use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::warn;

use crate::db::ContactMessage;
use crate::error::PortfolioError;
use crate::middleware::JsonBody;
use crate::router::PortfolioState;
use crate::types::NewMessage;

/// GET /api/contact
pub async fn list_messages(
    State(state): State<PortfolioState>,
) -> Result<Json<Vec<ContactMessage>>, PortfolioError> {
    Ok(Json(state.store.list_messages().await?))
}

/// POST /api/contact
pub async fn submit_message(
    State(state): State<PortfolioState>,
    JsonBody(body): JsonBody<NewMessage>,
) -> Result<Json<Value>, PortfolioError> {
    let id = state.store.insert_message(&body).await?;

    if let Err(e) = state.notifier.notify(id, &body) {
        warn!(id, error = %e, "contact notifier failed");
    }

    Ok(Json(json!({
        "message": "Message sent successfully!",
        "status": "success"
    })))
}
